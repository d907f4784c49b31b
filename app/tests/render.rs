use leptos::prelude::*;

use app::components::{toggle_menu, Footer, NavBar};
use app::pages::home::{ContactSection, ProjectGallery};
use app::projects;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Server-side rendering needs a reactive owner; give each test a fresh root.
fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new_root(None);
    let value = owner.with(f);
    drop(owner);
    value
}

#[test]
fn menu_starts_closed() {
    setup();

    let html = with_owner(|| view! { <NavBar/> }.to_html());
    assert!(html.contains("nav-links"));
    assert!(!html.contains("nav-collapsed"));
    // The wide-viewport list always carries the three section anchors.
    for target in ["#projects", "#about", "#contact"] {
        assert_eq!(1, html.matches(&format!("href=\"{target}\"")).count());
    }
}

#[test]
fn open_menu_lists_section_anchors() {
    setup();

    with_owner(|| {
        let open = RwSignal::new(false);
        toggle_menu(open);
        assert!(open.get());

        let html = view! { <NavBar open/> }.to_html();
        let collapsed = html.find("nav-collapsed").expect("collapsed list rendered");
        let collapsed = &html[collapsed..];
        assert_eq!(3, collapsed.matches("<li>").count());
        for target in ["#projects", "#about", "#contact"] {
            assert_eq!(1, collapsed.matches(&format!("href=\"{target}\"")).count());
        }
    });
}

#[test]
fn double_toggle_restores_initial_markup() {
    setup();

    with_owner(|| {
        let open = RwSignal::new(false);
        let initial = view! { <NavBar open/> }.to_html();

        toggle_menu(open);
        toggle_menu(open);
        assert!(!open.get());

        let roundtrip = view! { <NavBar open/> }.to_html();
        assert_eq!(initial, roundtrip);
    });
}

#[test]
fn gallery_renders_every_project_in_order() {
    setup();

    let catalog = projects::showcase();
    let html = with_owner(|| view! { <ProjectGallery/> }.to_html());

    assert_eq!(catalog.len(), html.matches("project-card").count());

    // Title positions must follow declaration order; each card must carry its
    // description and exactly its own technology labels.
    let positions = catalog
        .iter()
        .map(|project| {
            html.find(project.title.as_str())
                .unwrap_or_else(|| panic!("missing card for {}", project.title))
        })
        .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    for (i, project) in catalog.iter().enumerate() {
        let end = positions.get(i + 1).copied().unwrap_or(html.len());
        let card = &html[positions[i]..end];
        assert!(card.contains(&project.description));
        assert_eq!(project.technologies.len(), card.matches("<li>").count());
        for label in &project.technologies {
            assert!(card.contains(label.as_str()), "missing {label} badge");
        }
    }
}

#[test]
fn footer_shows_current_year() {
    setup();

    let html = with_owner(|| view! { <Footer/> }.to_html());
    let year = {
        use chrono::Datelike;
        chrono::Utc::now().year()
    };
    assert!(html.contains(&year.to_string()));
}

#[test]
fn contact_links_use_exact_targets() {
    setup();

    let html = with_owner(|| view! { <ContactSection/> }.to_html());
    assert_eq!(3, html.matches("href=").count());
    assert!(html.contains("href=\"mailto:brooklynnehill451@gmail.com\""));
    assert!(html.contains("href=\"https://github.com/brooklynnematos/\""));
    assert!(html.contains("href=\"https://www.linkedin.com/in/brooklynne-matos-3b2144b7\""));
}
