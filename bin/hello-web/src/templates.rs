//! Embedded page templates.
//!
//! minijinja picks auto-escaping from the template name: HTML for
//! `index.html`, JSON for `APP_CONFIG.js`.

use minijinja::Environment;

pub const INDEX_HTML: &str = "index.html";
pub const APP_CONFIG_JS: &str = "APP_CONFIG.js";

pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(INDEX_HTML, include_str!("templates/index.html"))?;
    env.add_template(APP_CONFIG_JS, include_str!("templates/APP_CONFIG.js"))?;
    Ok(env)
}
