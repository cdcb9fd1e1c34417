//! System tray icon with the lighting menu.
//!
//! Builds a tray icon with `Presets` and `Colors` submenus plus `Open config`
//! and `Exit` items, and acts as the [`ActionHost`] the lighting registry
//! binds its actions to.

use crate::{AppError, AppResult, MenuBindings, TrayStatus};

use std::panic::Location;

use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};
use perkey_tray_core::{ActionHost, ActionKind};
use tracing::{debug, info, instrument, warn};
use tray_icon::menu::{Menu, MenuItem, PredefinedMenuItem, Submenu};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// Edge length of the generated tray icon in pixels.
const ICON_SIZE: u32 = 32;

/// Keyboard body color.
const BODY_COLOR: Rgba<u8> = Rgba([0x2b, 0x2b, 0x2b, 0xff]);

/// Fully transparent pixel.
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    presets_menu: Submenu,
    colors_menu: Submenu,
    action_items: Vec<(ActionKind, MenuItem)>,
    bindings: MenuBindings,
}

impl TrayManager {
    /// Create a new tray manager with empty lighting submenus.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let presets_menu = Submenu::new(ActionKind::Preset.section_title(), true);
        let colors_menu = Submenu::new(ActionKind::Color.section_title(), true);
        let open_config_item = MenuItem::new("Open config", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let bindings = MenuBindings::new(open_config_item.id().clone(), exit_item.id().clone());

        menu.append(&presets_menu).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add presets menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        menu.append(&colors_menu).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add colors menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        menu.append(&PredefinedMenuItem::separator())
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to add separator: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        menu.append(&open_config_item)
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to add config menu: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        menu.append(&exit_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add exit menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let status = TrayStatus::Ready;
        let icon = Self::render_icon(&status)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(status.tooltip())
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            presets_menu,
            colors_menu,
            action_items: Vec::new(),
            bindings,
        })
    }

    /// Update the tray icon and tooltip for a new status.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_status(&mut self, status: &TrayStatus) -> AppResult<()> {
        let icon = Self::render_icon(status)?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(status.tooltip()))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    /// Menu ID routing for the async runtime.
    pub fn bindings(&self) -> &MenuBindings {
        &self.bindings
    }

    /// Draw a small keyboard whose key grid is lit in the status accent.
    ///
    /// Generated at runtime so no icon files need to ship with the binary.
    #[track_caller]
    fn render_icon(status: &TrayStatus) -> AppResult<Icon> {
        let [r, g, b] = status.accent();
        let key = Rgba([r, g, b, 0xff]);

        let rgba = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
            let in_body = (1..ICON_SIZE - 1).contains(&x) && (7..ICON_SIZE - 7).contains(&y);
            if !in_body {
                return CLEAR;
            }

            // 5 px pitch: 4 px key, 1 px gap
            let in_grid = (3..ICON_SIZE - 3).contains(&x) && (9..ICON_SIZE - 9).contains(&y);
            if in_grid && (x - 3) % 5 < 4 && (y - 9) % 5 < 4 {
                key
            } else {
                BODY_COLOR
            }
        });

        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn submenu(&self, kind: ActionKind) -> &Submenu {
        match kind {
            ActionKind::Preset => &self.presets_menu,
            ActionKind::Color => &self.colors_menu,
        }
    }
}

impl ActionHost for TrayManager {
    type Error = AppError;

    #[track_caller]
    fn register_action(&mut self, kind: ActionKind, label: &str, index: usize) -> AppResult<()> {
        let item = MenuItem::new(label, true, None);

        self.submenu(kind)
            .append(&item)
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to add {} menu item {:?}: {}", kind, label, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.bindings.bind_action(item.id().clone(), index);
        self.action_items.push((kind, item));

        debug!(%kind, label, index, "Menu action registered");

        Ok(())
    }

    fn teardown(&mut self) {
        let items = std::mem::take(&mut self.action_items);
        for (kind, item) in &items {
            if let Err(e) = self.submenu(*kind).remove(item) {
                warn!(error = %e, "Failed to remove menu item");
            }
        }
        self.bindings.clear_actions();

        if let Err(e) = self.tray_icon.set_visible(false) {
            warn!(error = %e, "Failed to hide tray icon");
        }

        info!(removed = items.len(), "Tray menu torn down");
    }
}
