use bitflags::bitflags;

bitflags! {
    /// Window flags as a raw bit set.
    ///
    /// The bit values mirror the flag enumeration of the desktop
    /// toolkits: the low byte encodes the window type, everything
    /// above it is an independent hint bit. The type patterns share
    /// bits with each other, the hints don't.
    ///
    /// This table is a given constant, not something derived.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        const WINDOW = 0x0000_0001;
        const DIALOG = 0x0000_0002 | Self::WINDOW.bits();
        const SHEET = 0x0000_0004 | Self::WINDOW.bits();
        const DRAWER = Self::SHEET.bits() | Self::DIALOG.bits();
        const POPUP = 0x0000_0008 | Self::WINDOW.bits();
        const TOOL = Self::POPUP.bits() | Self::DIALOG.bits();
        const TOOL_TIP = Self::POPUP.bits() | Self::SHEET.bits();
        const SPLASH_SCREEN = Self::TOOL_TIP.bits() | Self::DIALOG.bits();

        const MS_WINDOWS_FIXED_SIZE_DIALOG_HINT = 0x0000_0100;
        const X11_BYPASS_WINDOW_MANAGER_HINT = 0x0000_0400;
        const FRAMELESS_WINDOW_HINT = 0x0000_0800;
        const NO_DROP_SHADOW_WINDOW_HINT = 0x4000_0000;
        const WINDOW_TITLE_HINT = 0x0000_1000;
        const WINDOW_SYSTEM_MENU_HINT = 0x0000_2000;
        const WINDOW_MINIMIZE_BUTTON_HINT = 0x0000_4000;
        const WINDOW_MAXIMIZE_BUTTON_HINT = 0x0000_8000;
        const WINDOW_CLOSE_BUTTON_HINT = 0x0800_0000;
        const WINDOW_CONTEXT_HELP_BUTTON_HINT = 0x0001_0000;
        const WINDOW_SHADE_BUTTON_HINT = 0x0002_0000;
        const WINDOW_STAYS_ON_TOP_HINT = 0x0004_0000;
        const WINDOW_STAYS_ON_BOTTOM_HINT = 0x0400_0000;
        const CUSTOMIZE_WINDOW_HINT = 0x0200_0000;

        /// Sub-range of the flag space that holds the window type.
        const TYPE_MASK = 0x0000_00ff;
    }
}

impl WindowFlags {
    /// The raw bits of the type sub-range.
    pub fn window_type_bits(self) -> u32 {
        self.bits() & Self::TYPE_MASK.bits()
    }
}

/// Window type. Mutually exclusive, a window is always exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowType {
    Window,
    Dialog,
    Sheet,
    Drawer,
    Popup,
    Tool,
    ToolTip,
    SplashScreen,
}

/// Type catalog in its fixed order. The first entry is the default.
pub const WINDOW_TYPES: [WindowType; 8] = [
    WindowType::Window,
    WindowType::Dialog,
    WindowType::Sheet,
    WindowType::Drawer,
    WindowType::Popup,
    WindowType::Tool,
    WindowType::ToolTip,
    WindowType::SplashScreen,
];

impl WindowType {
    /// Bit pattern in the type sub-range.
    pub const fn bits(self) -> WindowFlags {
        match self {
            WindowType::Window => WindowFlags::WINDOW,
            WindowType::Dialog => WindowFlags::DIALOG,
            WindowType::Sheet => WindowFlags::SHEET,
            WindowType::Drawer => WindowFlags::DRAWER,
            WindowType::Popup => WindowFlags::POPUP,
            WindowType::Tool => WindowFlags::TOOL,
            WindowType::ToolTip => WindowFlags::TOOL_TIP,
            WindowType::SplashScreen => WindowFlags::SPLASH_SCREEN,
        }
    }

    /// Flag name as used in the rendered summary.
    pub const fn name(self) -> &'static str {
        match self {
            WindowType::Window => "Window",
            WindowType::Dialog => "Dialog",
            WindowType::Sheet => "Sheet",
            WindowType::Drawer => "Drawer",
            WindowType::Popup => "Popup",
            WindowType::Tool => "Tool",
            WindowType::ToolTip => "ToolTip",
            WindowType::SplashScreen => "SplashScreen",
        }
    }

    /// Human label for the radio button.
    pub const fn label(self) -> &'static str {
        match self {
            WindowType::Window => "Window",
            WindowType::Dialog => "Dialog",
            WindowType::Sheet => "Sheet",
            WindowType::Drawer => "Drawer",
            WindowType::Popup => "Popup",
            WindowType::Tool => "Tool",
            WindowType::ToolTip => "Tooltip",
            WindowType::SplashScreen => "Splash screen",
        }
    }

    /// Window type encoded in the type sub-range of the given flags.
    ///
    /// The type patterns overlap, so this is an exact match against the
    /// masked sub-range, not a bit test. At most one entry can match.
    pub fn from_flags(flags: WindowFlags) -> Option<WindowType> {
        WINDOW_TYPES
            .into_iter()
            .find(|t| t.bits().bits() == flags.window_type_bits())
    }
}

/// Window hint. Independently toggleable, any subset may be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowHint {
    MsWindowsFixedSizeDialog,
    X11BypassWindowManager,
    Frameless,
    NoDropShadow,
    Title,
    SystemMenu,
    MinimizeButton,
    MaximizeButton,
    CloseButton,
    ContextHelpButton,
    ShadeButton,
    StaysOnTop,
    StaysOnBottom,
    Customize,
}

/// Hint catalog in its fixed order. This order drives both the checkbox
/// list and the rendered summary, regardless of toggle order.
pub const WINDOW_HINTS: [WindowHint; 14] = [
    WindowHint::MsWindowsFixedSizeDialog,
    WindowHint::X11BypassWindowManager,
    WindowHint::Frameless,
    WindowHint::NoDropShadow,
    WindowHint::Title,
    WindowHint::SystemMenu,
    WindowHint::MinimizeButton,
    WindowHint::MaximizeButton,
    WindowHint::CloseButton,
    WindowHint::ContextHelpButton,
    WindowHint::ShadeButton,
    WindowHint::StaysOnTop,
    WindowHint::StaysOnBottom,
    WindowHint::Customize,
];

impl WindowHint {
    /// Hint bit.
    pub const fn bits(self) -> WindowFlags {
        match self {
            WindowHint::MsWindowsFixedSizeDialog => {
                WindowFlags::MS_WINDOWS_FIXED_SIZE_DIALOG_HINT
            }
            WindowHint::X11BypassWindowManager => WindowFlags::X11_BYPASS_WINDOW_MANAGER_HINT,
            WindowHint::Frameless => WindowFlags::FRAMELESS_WINDOW_HINT,
            WindowHint::NoDropShadow => WindowFlags::NO_DROP_SHADOW_WINDOW_HINT,
            WindowHint::Title => WindowFlags::WINDOW_TITLE_HINT,
            WindowHint::SystemMenu => WindowFlags::WINDOW_SYSTEM_MENU_HINT,
            WindowHint::MinimizeButton => WindowFlags::WINDOW_MINIMIZE_BUTTON_HINT,
            WindowHint::MaximizeButton => WindowFlags::WINDOW_MAXIMIZE_BUTTON_HINT,
            WindowHint::CloseButton => WindowFlags::WINDOW_CLOSE_BUTTON_HINT,
            WindowHint::ContextHelpButton => WindowFlags::WINDOW_CONTEXT_HELP_BUTTON_HINT,
            WindowHint::ShadeButton => WindowFlags::WINDOW_SHADE_BUTTON_HINT,
            WindowHint::StaysOnTop => WindowFlags::WINDOW_STAYS_ON_TOP_HINT,
            WindowHint::StaysOnBottom => WindowFlags::WINDOW_STAYS_ON_BOTTOM_HINT,
            WindowHint::Customize => WindowFlags::CUSTOMIZE_WINDOW_HINT,
        }
    }

    /// Flag name as used in the rendered summary.
    pub const fn name(self) -> &'static str {
        match self {
            WindowHint::MsWindowsFixedSizeDialog => "MSWindowsFixedSizeDialogHint",
            WindowHint::X11BypassWindowManager => "X11BypassWindowManagerHint",
            WindowHint::Frameless => "FramelessWindowHint",
            WindowHint::NoDropShadow => "NoDropShadowWindowHint",
            WindowHint::Title => "WindowTitleHint",
            WindowHint::SystemMenu => "WindowSystemMenuHint",
            WindowHint::MinimizeButton => "WindowMinimizeButtonHint",
            WindowHint::MaximizeButton => "WindowMaximizeButtonHint",
            WindowHint::CloseButton => "WindowCloseButtonHint",
            WindowHint::ContextHelpButton => "WindowContextHelpButtonHint",
            WindowHint::ShadeButton => "WindowShadeButtonHint",
            WindowHint::StaysOnTop => "WindowStaysOnTopHint",
            WindowHint::StaysOnBottom => "WindowStaysOnBottomHint",
            WindowHint::Customize => "CustomizeWindowHint",
        }
    }

    /// Human label for the checkbox.
    pub const fn label(self) -> &'static str {
        match self {
            WindowHint::MsWindowsFixedSizeDialog => "MS Windows fixed size dialog",
            WindowHint::X11BypassWindowManager => "X11 bypass window manager",
            WindowHint::Frameless => "Frameless window",
            WindowHint::NoDropShadow => "No drop shadow",
            WindowHint::Title => "Window title",
            WindowHint::SystemMenu => "Window system menu",
            WindowHint::MinimizeButton => "Window minimize button",
            WindowHint::MaximizeButton => "Window maximize button",
            WindowHint::CloseButton => "Window close button",
            WindowHint::ContextHelpButton => "Window context help button",
            WindowHint::ShadeButton => "Window shade button",
            WindowHint::StaysOnTop => "Window stays on top",
            WindowHint::StaysOnBottom => "Window stays on bottom",
            WindowHint::Customize => "Customize window",
        }
    }
}
