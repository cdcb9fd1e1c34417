mod color;
mod model;
mod template;
