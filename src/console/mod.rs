pub mod advanced;

pub use advanced::AdvancedGamingConsole;

use log::debug;

/// Informational queries every console description must answer.
///
/// Each query returns a fixed text block; implementations never print.
#[cfg_attr(test, mockall::automock)]
pub trait ConsoleInfoProvider {
    /// Name of the console model being described
    fn model_name(&self) -> &str;

    /// Main hardware specifications
    fn display_specs(&self) -> String;

    /// Default and upgradeable storage configurations
    fn storage_options(&self) -> String;

    /// Backward and forward game compatibility
    fn show_compatibility(&self) -> String;

    /// Comparison against competing consoles
    fn compare(&self) -> String;

    /// Cosmetic customization and accessories
    fn customization(&self) -> String;

    /// Build quality and warranty
    fn durability(&self) -> String;

    /// How to try the console before buying
    fn demo_info(&self) -> String;

    /// Features for players with disabilities
    fn accessibility(&self) -> String;

    /// AI technologies available to games
    fn ai_technologies(&self) -> String;

    /// 3D sound and audio customization
    fn audio_options(&self) -> String;

    /// Power draw per mode and efficiency rating
    fn power_consumption(&self) -> String;

    /// Account and device security options
    fn security(&self) -> String;

    /// Ray-tracing capabilities
    fn ray_tracing_performance(&self) -> String;

    /// Network connectivity options
    fn network_config(&self) -> String;

    /// Support available to sales staff and customers
    fn sales_guidance(&self) -> String;
}

/// Console models that can be described
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleModel {
    #[default]
    Advanced,
}

/// Create the provider for the given console model
pub fn new_console(model: ConsoleModel) -> Box<dyn ConsoleInfoProvider> {
    let console: Box<dyn ConsoleInfoProvider> = match model {
        ConsoleModel::Advanced => Box::new(AdvancedGamingConsole::new()),
    };
    debug!("Created console provider: {}", console.model_name());
    console
}
