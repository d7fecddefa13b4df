use collection_json::{Data, Item, Link};

/// Installs a test-friendly subscriber; `RUST_LOG=debug cargo test` shows the trace.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_test_writer()
        .try_init();
}

/// A friend entry shaped like the ones in the Collection+JSON format guide.
pub fn friend(slug: &str, full_name: &str) -> Item {
    Item::new(format!("http://example.org/friends/{slug}"))
        .with_data(vec![
            Data::new("full-name", full_name).with_prompt("Full Name"),
            Data::new("email", format!("{slug}@example.org")).with_prompt("Email"),
        ])
        .with_links(vec![
            Link::new("blog", format!("http://examples.org/blogs/{slug}")).with_prompt("Blog"),
            Link::new("avatar", format!("http://examples.org/images/{slug}"))
                .with_prompt("Avatar")
                .with_render("image"),
        ])
}
