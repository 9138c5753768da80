use std::fmt;

use crate::console::ConsoleInfoProvider;

/// Query run against the console when an option is selected
pub type Query = fn(&dyn ConsoleInfoProvider) -> String;

/// What happens when a menu option is selected
#[derive(Clone, Copy)]
pub enum Action {
    Show(Query),
    Exit,
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Show(_) => f.write_str("Show"),
            Action::Exit => f.write_str("Exit"),
        }
    }
}

/// Menu option
#[derive(Debug, Clone)]
pub struct MenuOption {
    pub id: String,
    pub name: String,
    pub action: Action,
}

impl MenuOption {
    fn show(id: &str, name: &str, query: Query) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            action: Action::Show(query),
        }
    }
}

/// Menu
#[derive(Debug, Clone)]
pub struct Menu {
    pub id: String,
    pub name: String,
    pub options: Vec<MenuOption>,
}

impl Menu {
    /// Build the buying-advice menu: one option per console query, then Exit
    pub fn main_menu() -> Self {
        let mut options = vec![
            MenuOption::show("specs", "Display specifications", |c| c.display_specs()),
            MenuOption::show("storage", "Storage options", |c| c.storage_options()),
            MenuOption::show("compatibility", "Compatibility information", |c| {
                c.show_compatibility()
            }),
            MenuOption::show("compare", "Compare with other consoles", |c| c.compare()),
            MenuOption::show("customization", "Customization options", |c| c.customization()),
            MenuOption::show("durability", "Durability information", |c| c.durability()),
            MenuOption::show("demo", "Demo and testing", |c| c.demo_info()),
            MenuOption::show("accessibility", "Accessibility features", |c| c.accessibility()),
            MenuOption::show("ai", "AI technologies", |c| c.ai_technologies()),
            MenuOption::show("audio", "Audio options", |c| c.audio_options()),
            MenuOption::show("power", "Power consumption", |c| c.power_consumption()),
            MenuOption::show("security", "Security options", |c| c.security()),
            MenuOption::show("ray_tracing", "Ray-tracing performance", |c| {
                c.ray_tracing_performance()
            }),
            MenuOption::show("network", "Network configuration", |c| c.network_config()),
            MenuOption::show("sales", "Sales guidance", |c| c.sales_guidance()),
        ];

        // Exit always comes last
        options.push(MenuOption {
            id: "exit".to_string(),
            name: "Exit".to_string(),
            action: Action::Exit,
        });

        Self {
            id: "main".to_string(),
            name: "User Menu for advice to buy your video game machine :".to_string(),
            options,
        }
    }

    /// Number of selectable options, Exit included
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Look up an option by its 1-based display number
    pub fn option(&self, number: usize) -> Option<&MenuOption> {
        number.checked_sub(1).and_then(|index| self.options.get(index))
    }

    /// Render the title and numbered options, one per line
    pub fn render(&self) -> String {
        let mut text = format!("\n{}\n", self.name);
        for (index, option) in self.options.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", index + 1, option.name));
        }
        text
    }

    /// Prompt shown after the option list
    pub fn prompt(&self) -> String {
        format!("Enter your choice (1-{}): ", self.len())
    }
}
