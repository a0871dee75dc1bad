//! Tera template engine setup.

use tera::Tera;

use crate::config::TEMPLATE_GLOB;
use crate::error::AppError;

/// Initialize the Tera template engine from the template directory.
pub fn init_templates() -> Result<Tera, AppError> {
    let tera = Tera::new(TEMPLATE_GLOB)?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_load_and_home_renders() {
        let tera = init_templates().expect("templates should parse");

        let mut context = tera::Context::new();
        context.insert(
            "config",
            &crate::config::UiConfig {
                site_name: "status page".to_string(),
                version: "1.2.3".to_string(),
            },
        );

        let html = tera.render("home.html", &context).expect("render home");
        assert!(html.contains("status page"));
        assert!(html.contains("1.2.3"));
    }
}
