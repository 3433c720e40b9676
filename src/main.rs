use anyhow::{Context, Result};
use royalty_site::config::Config;
use royalty_site::content::{ContentRegistry, DirectoryContent};
use royalty_site::i18n::{ContentValidator, LocaleSelection};
use royalty_site::pages::{footer, header, PageKind, RenderContext};
use royalty_site::session::{AuthProvider, SessionAuth};
use serde_json::{json, Map, Value};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("royalty_site=info".parse()?)
        )
        .init();

    info!("Rendering site content");

    let config = Config::from_env()?;
    let site = config.load_site()?;

    let registry = match &config.content_dir {
        Some(dir) => {
            info!("Loading content from {}", dir.display());
            ContentRegistry::build(&DirectoryContent::new(dir))
        }
        None => ContentRegistry::embedded(),
    }
    .context("Failed to build content registry")?;

    let report = ContentValidator::validate(&registry);
    for problem in &report.errors {
        error!("{problem}");
    }
    for problem in &report.warnings {
        warn!("{problem}");
    }
    info!(
        "Content validation: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );

    let selection = LocaleSelection::from_code(&config.initial_locale);
    let locale = selection.current();
    let auth = SessionAuth::signed_out();
    let user = auth.current_user();

    let ctx = RenderContext::new(&registry, &site, locale.code()).with_user(user.as_ref());

    let mut pages = Map::new();
    for page in PageKind::ALL {
        pages.insert(page.route().to_string(), page.render_json(&ctx)?);
    }

    let output = json!({
        "locale": locale,
        "header": header::render(&ctx),
        "footer": footer::render(&ctx),
        "pages": Value::Object(pages),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    info!("Rendered {} pages in {}", PageKind::ALL.len(), locale);
    Ok(())
}
