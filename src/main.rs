mod console;
mod controller;
mod error;
mod ui;
use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::io;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

/// Console Advisor - Buying guide for the NextGen gaming console
#[derive(Parser, Debug)]
#[command(name = "console-advisor", version)]
#[command(about = "Interactive menu describing the NextGen gaming console", long_about = None)]
struct Args {}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();
    
    // Parse command-line arguments
    let _args = Args::parse();
    
    debug!("Starting Console Advisor...");
    
    // Set up Ctrl-C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        info!("Received Ctrl-C, shutting down");
        r.store(false, Ordering::SeqCst);
        std::process::exit(0);
    })?;
    
    let console = console::new_console(console::ConsoleModel::default());
    let mut controller = controller::Controller::new(console, ui::Menu::main_menu());
    
    debug!("Console Advisor initialized");
    
    let stdin = io::stdin();
    let stdout = io::stdout();
    controller.run_until_exit(stdin.lock(), stdout.lock(), running)?;
    
    debug!("Console Advisor stopped in state {:?}", controller.state());
    Ok(())
}
