mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod device_config;

pub(crate) use {
    behaviour_config::BehaviourConfig, config::Config, device_config::DeviceConfig,
};

pub(crate) const DEFAULT_NOTIFY_ON_FAILURE: bool = true;

pub(crate) fn default_notify_on_failure() -> bool {
    DEFAULT_NOTIFY_ON_FAILURE
}

pub(crate) fn default_binary() -> String {
    perkey_tray_core::DEFAULT_BINARY.to_string()
}
