//! HTML views rendered with minijinja. Templates are compiled into the binary.

use minijinja::Environment;
use serde::Serialize;

pub const TABLE_TEMPLATE: &str = "tabla.html";
pub const REGISTER_TEMPLATE: &str = "registro.html";

pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(TABLE_TEMPLATE, include_str!("../templates/tabla.html"))?;
        env.add_template(REGISTER_TEMPLATE, include_str!("../templates/registro.html"))?;
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
