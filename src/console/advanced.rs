use super::ConsoleInfoProvider;

const MODEL_NAME: &str = "NextGen Gaming Console";

/// The NextGen console, described with fixed marketing text
#[derive(Debug, Default, Clone, Copy)]
pub struct AdvancedGamingConsole;

impl AdvancedGamingConsole {
    /// Create a new advanced console description
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleInfoProvider for AdvancedGamingConsole {
    fn model_name(&self) -> &str {
        MODEL_NAME
    }

    fn display_specs(&self) -> String {
        [
            "Console: NextGen Gaming Console",
            "Processor: Octa-core 3.5GHz",
            "RAM: 16GB GDDR6",
            "Graphics: Custom RDNA 2 GPU",
            "Storage: 1TB NVMe SSD",
        ]
        .join("\n")
    }

    fn storage_options(&self) -> String {
        [
            "Storage Options:",
            "1. 1TB NVMe SSD (Default)",
            "2. 2TB NVMe SSD",
            "3. 4TB NVMe SSD",
            "4. 1TB NVMe SSD + 2TB HDD",
            "Upgradeable with additional M.2 SSD slot",
        ]
        .join("\n")
    }

    fn show_compatibility(&self) -> String {
        [
            "Backward Compatible: True",
            "Forward Compatible: True",
            "Supports games from previous generation and optimized for future releases",
        ]
        .join("\n")
    }

    fn compare(&self) -> String {
        [
            "Comparison with other consoles:",
            "1. Performance: 20% faster than Competitor X",
            "2. Graphics: 15% better visual quality than Competitor Y",
            "3. Load Times: 30% faster than previous generation",
            "For detailed comparisons, visit our website",
        ]
        .join("\n")
    }

    fn customization(&self) -> String {
        [
            "Customization Options:",
            "1. Custom faceplates",
            "2. RGB lighting",
            "3. Controller skins",
            "",
            "Available Accessories:",
            "1. Pro Controller",
            "2. VR Headset",
            "3. Racing Wheel",
        ]
        .join("\n")
    }

    fn durability(&self) -> String {
        [
            "Durability Information:",
            "1. Military-grade drop test certified",
            "2. Dust and water-resistant (IP54)",
            "3. 5-year warranty included",
        ]
        .join("\n")
    }

    fn demo_info(&self) -> String {
        [
            "Demo videos and game testing:",
            "1. Visit our YouTube channel for gameplay demos",
            "2. Schedule an in-store demo for hands-on experience",
            "3. 7-day trial period available with purchase",
        ]
        .join("\n")
    }

    fn accessibility(&self) -> String {
        [
            "Accessibility Features:",
            "1. Compatible with screen readers",
            "2. Supports closed captioning",
            "3. Customizable button mapping",
            "4. Voice control support",
        ]
        .join("\n")
    }

    fn ai_technologies(&self) -> String {
        [
            "AI Technologies in Games:",
            "1. Advanced NPC behavior",
            "2. Dynamic difficulty adjustment",
            "3. Procedural content generation",
            "4. Real-time language translation",
        ]
        .join("\n")
    }

    fn audio_options(&self) -> String {
        [
            "3D Sound and Audio Customization:",
            "1. 3D Spatial Audio support",
            "2. Custom EQ settings",
            "3. Multi-output audio (headphones, speakers, HDMI)",
            "4. Voice chat noise cancellation",
        ]
        .join("\n")
    }

    fn power_consumption(&self) -> String {
        [
            "Energy Efficiency: 80 PLUS Platinum",
            "Power Consumption:",
            "1. Standby: 0.5W",
            "2. Idle: 30W",
            "3. Gaming: 100-180W depending on the game",
            "4. Energy-saving mode available",
        ]
        .join("\n")
    }

    fn security(&self) -> String {
        [
            "Advanced Security Options:",
            "1. Two-factor authentication",
            "2. Biometric login (fingerprint)",
            "3. Parental controls",
            "4. Encrypted storage",
        ]
        .join("\n")
    }

    fn ray_tracing_performance(&self) -> String {
        [
            "Ray-Tracing Performance:",
            "1. Supports real-time ray tracing up to 4K/60fps",
            "2. 50% faster ray tracing performance than previous gen",
            "3. Compatible with all major ray tracing APIs",
        ]
        .join("\n")
    }

    fn network_config(&self) -> String {
        [
            "Network Configuration Options:",
            "1. Wi-Fi 6 (802.11ax) support",
            "2. 2.5Gbps Ethernet port",
            "3. IPv6 Support: True",
            "4. Built-in VPN for secure gaming",
        ]
        .join("\n")
    }

    fn sales_guidance(&self) -> String {
        [
            "Sales Staff Guidance:",
            "1. In-store demonstrations available",
            "2. Online chat support 24/7",
            "3. Detailed user manual and quick start guide included",
            "4. Video tutorials available on our website",
        ]
        .join("\n")
    }
}
