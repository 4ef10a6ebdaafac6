#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{App, HttpServer, web};
    use anyhow::Context as _;
    use leptos::config::get_configuration;
    use leptos_actix::{LeptosRoutes, generate_route_list};
    use portfolio_site::app::{App as SiteApp, shell};

    let conf = get_configuration(None).context("reading leptos configuration")?;
    let addr = conf.leptos_options.site_addr;

    eprintln!("listening on http://{addr}");

    HttpServer::new(move || {
        // Generate the list of routes in your Leptos App
        let routes = generate_route_list(SiteApp);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.clone().to_string();

        App::new()
            // serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            // cargo-leptos copies the `assets` directory into the site root
            .service(Files::new("/", site_root.as_str()))
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)
    .with_context(|| format!("binding {addr}"))?
    .run()
    .await
    .context("running http server")?;

    Ok(())
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    portfolio_site::mount();
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
