pub mod selection;

use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::console::ConsoleInfoProvider;
use crate::error::MenuError;
use crate::ui::{Action, Menu};
use selection::Selection;

/// Menu loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Running,
    Terminated,
}

/// Result of handling one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Text of the selected console query
    Show(String),
    /// The input did not name a menu option
    Invalid(MenuError),
    Exit,
}

/// Menu loop that dispatches selections to a console provider
pub struct Controller {
    console: Box<dyn ConsoleInfoProvider>,
    menu: Menu,
    state: ControllerState,
}

impl Controller {
    /// Create a new controller in the running state
    pub fn new(console: Box<dyn ConsoleInfoProvider>, menu: Menu) -> Self {
        debug!("Creating controller with menu '{}' ({} options)", menu.id, menu.len());
        Self {
            console,
            menu,
            state: ControllerState::Running,
        }
    }

    /// Current state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Handle one line of input; `None` means end of input
    pub fn step(&mut self, line: Option<&str>) -> Response {
        if self.state == ControllerState::Terminated {
            return Response::Exit;
        }

        let Some(line) = line else {
            info!("End of input, exiting");
            self.state = ControllerState::Terminated;
            return Response::Exit;
        };

        match Selection::parse(line, &self.menu) {
            Ok(Selection::Exit) => {
                info!("Exit selected");
                self.state = ControllerState::Terminated;
                Response::Exit
            }
            Ok(Selection::Option(index)) => {
                let option = &self.menu.options[index];
                debug!("Executing choice {}: {}", index + 1, option.id);
                match option.action {
                    Action::Show(query) => Response::Show(query(self.console.as_ref())),
                    // Selection::parse maps exit options to Selection::Exit
                    Action::Exit => {
                        self.state = ControllerState::Terminated;
                        Response::Exit
                    }
                }
            }
            Err(e) => {
                warn!("{}", e);
                Response::Invalid(e)
            }
        }
    }

    /// Run the menu until Exit, end of input, or the running flag is cleared
    pub fn run_until_exit<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        running: Arc<AtomicBool>,
    ) -> Result<()> {
        debug!("Controller running in state: {:?}", self.state);

        let mut buffer = Vec::new();
        while self.state == ControllerState::Running && running.load(Ordering::SeqCst) {
            write!(output, "{}{}", self.menu.render(), self.menu.prompt())
                .and_then(|_| output.flush())
                .context("Failed to write menu")?;

            buffer.clear();
            let read = input
                .read_until(b'\n', &mut buffer)
                .context("Failed to read user input")?;
            let line = String::from_utf8_lossy(&buffer);
            trace!("Read {} bytes: {:?}", read, line);

            let response = if read == 0 {
                self.step(None)
            } else {
                self.step(Some(&line))
            };

            match response {
                Response::Show(text) => writeln!(output, "\n{}", text),
                Response::Invalid(e) => writeln!(output, "{}", e),
                Response::Exit => Ok(()),
            }
            .context("Failed to write response")?;
        }

        output.flush().context("Failed to flush output")?;
        debug!("Controller finished in state: {:?}", self.state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{AdvancedGamingConsole, MockConsoleInfoProvider};
    use std::io::Cursor;

    const SPECS: &str = "Console: NextGen Gaming Console\n\
                         Processor: Octa-core 3.5GHz\n\
                         RAM: 16GB GDDR6\n\
                         Graphics: Custom RDNA 2 GPU\n\
                         Storage: 1TB NVMe SSD";

    fn new_controller() -> Controller {
        Controller::new(Box::new(AdvancedGamingConsole::new()), Menu::main_menu())
    }

    fn run_session(lines: &[&str]) -> String {
        let mut controller = new_controller();
        let input = Cursor::new(lines.join("\n"));
        let mut output = Vec::new();
        controller
            .run_until_exit(input, &mut output, Arc::new(AtomicBool::new(true)))
            .unwrap();
        assert_eq!(controller.state(), ControllerState::Terminated);
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_specs_then_exit() {
        let output = run_session(&["1", "Exit"]);
        assert!(output.contains(SPECS));
        assert_eq!(output.matches("Enter your choice (1-16): ").count(), 2);
    }

    #[test]
    fn test_invalid_then_specs_then_exit() {
        let output = run_session(&["99", "1", "Exit"]);
        let notice = output
            .find("Error: Invalid selection '99'. Please enter a number between 1 and 16.")
            .unwrap();
        let specs = output.find(SPECS).unwrap();
        assert!(notice < specs);
    }

    #[test]
    fn test_every_feature_shows_its_own_text() {
        let console = AdvancedGamingConsole::new();
        let expected = [
            console.display_specs(),
            console.storage_options(),
            console.show_compatibility(),
            console.compare(),
            console.customization(),
            console.durability(),
            console.demo_info(),
            console.accessibility(),
            console.ai_technologies(),
            console.audio_options(),
            console.power_consumption(),
            console.security(),
            console.ray_tracing_performance(),
            console.network_config(),
            console.sales_guidance(),
        ];
        assert_eq!(expected.len() + 1, Menu::main_menu().len());

        for (index, text) in expected.iter().enumerate() {
            let choice = (index + 1).to_string();
            let output = run_session(&[choice.as_str(), "Exit"]);
            assert!(output.contains(text.as_str()), "option {} missing its text", choice);
            for (other, other_text) in expected.iter().enumerate() {
                if other != index {
                    assert!(
                        !output.contains(other_text.as_str()),
                        "option {} showed option {}",
                        choice,
                        other + 1
                    );
                }
            }
        }
    }

    #[test]
    fn test_each_option_calls_one_query() {
        let mut console = MockConsoleInfoProvider::new();
        console.expect_display_specs().times(1).returning(|| "1".to_string());
        console.expect_storage_options().times(1).returning(|| "2".to_string());
        console.expect_show_compatibility().times(1).returning(|| "3".to_string());
        console.expect_compare().times(1).returning(|| "4".to_string());
        console.expect_customization().times(1).returning(|| "5".to_string());
        console.expect_durability().times(1).returning(|| "6".to_string());
        console.expect_demo_info().times(1).returning(|| "7".to_string());
        console.expect_accessibility().times(1).returning(|| "8".to_string());
        console.expect_ai_technologies().times(1).returning(|| "9".to_string());
        console.expect_audio_options().times(1).returning(|| "10".to_string());
        console.expect_power_consumption().times(1).returning(|| "11".to_string());
        console.expect_security().times(1).returning(|| "12".to_string());
        console.expect_ray_tracing_performance().times(1).returning(|| "13".to_string());
        console.expect_network_config().times(1).returning(|| "14".to_string());
        console.expect_sales_guidance().times(1).returning(|| "15".to_string());

        let mut controller = Controller::new(Box::new(console), Menu::main_menu());
        for number in 1..=15 {
            let choice = number.to_string();
            assert_eq!(controller.step(Some(choice.as_str())), Response::Show(choice.clone()));
        }
        assert_eq!(controller.step(Some("16")), Response::Exit);
    }

    #[test]
    fn test_non_numeric_input_reprompts() {
        let output = run_session(&["abc", "16"]);
        assert!(output.contains("Error: Invalid selection 'abc'."));
        assert_eq!(output.matches("Enter your choice (1-16): ").count(), 2);
    }

    #[test]
    fn test_exit_produces_no_further_output() {
        let output = run_session(&["16", "1"]);
        assert!(output.ends_with("Enter your choice (1-16): "));
        assert!(!output.contains(SPECS));
    }

    #[test]
    fn test_end_of_input_terminates() {
        let output = run_session(&["2"]);
        assert!(output.contains("Storage Options:"));
        assert!(output.ends_with("Enter your choice (1-16): "));
    }

    #[test]
    fn test_cleared_flag_stops_loop() {
        let mut controller = new_controller();
        let mut output = Vec::new();
        controller
            .run_until_exit(Cursor::new("1\n"), &mut output, Arc::new(AtomicBool::new(false)))
            .unwrap();
        assert!(output.is_empty());
        assert_eq!(controller.state(), ControllerState::Running);
    }

    #[test]
    fn test_step_transitions() {
        let mut controller = new_controller();
        assert_eq!(controller.state(), ControllerState::Running);

        assert!(matches!(controller.step(Some("0")), Response::Invalid(_)));
        assert_eq!(controller.state(), ControllerState::Running);

        assert_eq!(controller.step(Some("1")), Response::Show(SPECS.to_string()));
        assert_eq!(controller.state(), ControllerState::Running);

        assert_eq!(controller.step(Some("exit")), Response::Exit);
        assert_eq!(controller.state(), ControllerState::Terminated);

        // Terminated is final
        assert_eq!(controller.step(Some("1")), Response::Exit);
        assert_eq!(controller.state(), ControllerState::Terminated);
    }

    #[test]
    fn test_same_choice_twice_is_identical() {
        let mut controller = new_controller();
        let first = controller.step(Some("9"));
        let second = controller.step(Some("9"));
        assert!(matches!(first, Response::Show(_)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_dispatch_calls_matching_query() {
        let mut console = MockConsoleInfoProvider::new();
        console
            .expect_network_config()
            .times(1)
            .returning(|| "network".to_string());
        console
            .expect_display_specs()
            .times(2)
            .returning(|| "specs".to_string());

        let mut controller = Controller::new(Box::new(console), Menu::main_menu());
        assert_eq!(controller.step(Some("14")), Response::Show("network".to_string()));
        assert_eq!(controller.step(Some("1")), Response::Show("specs".to_string()));
        assert_eq!(controller.step(Some("1")), Response::Show("specs".to_string()));
        assert!(matches!(controller.step(Some("42")), Response::Invalid(_)));
        assert_eq!(controller.step(None), Response::Exit);
    }
}
