mod color;
mod command_line;
mod model;
mod preset;
mod template;

pub use {
    color::{COLORS, Color},
    command_line::CommandLine,
    model::Model,
    preset::{PRESETS, Preset},
    template::{COLOR_FLAG, CommandTemplate, DEFAULT_BINARY, PRESET_FLAG},
};
