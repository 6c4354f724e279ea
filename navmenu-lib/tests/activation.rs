use navmenu_lib::context::{BaseUrlResolver, Environment, StaticRequest};
use navmenu_lib::{ActiveElement, Builder, ItemId, ItemOptions, MenuConfig, MenuError, RestBase};

fn env_at(url: &str) -> Environment {
    let urls = BaseUrlResolver::new("http://localhost").unwrap();
    Environment::new(urls, StaticRequest::from_url(url).unwrap())
}

fn restful() -> MenuConfig {
    MenuConfig::no_cache().with_restful(true)
}

fn active_titles(menu: &Builder) -> Vec<String> {
    menu.all()
        .iter()
        .filter(|item| item.is_active())
        .map(|item| item.title().to_string())
        .collect()
}

// ============================================================================
// Exact Matching
// ============================================================================

#[test]
fn test_exact_match_activates_on_add() {
    let mut menu = Builder::new("main", MenuConfig::no_cache(), env_at("http://localhost/about"));
    menu.add("Home", "/").unwrap();
    menu.add("About", "about").unwrap();

    assert_eq!(active_titles(&menu), vec!["About"]);
    assert_eq!(menu.get("about").unwrap().attr("class"), Some("active"));
}

#[test]
fn test_exact_match_ignores_the_query_string() {
    let mut menu = Builder::new("main", MenuConfig::no_cache(), env_at("http://localhost/about?page=2"));
    menu.add("Home", "/").unwrap();
    menu.add("About", "about").unwrap();

    assert_eq!(active_titles(&menu), vec!["About"]);
}

#[test]
fn test_exact_match_ignores_sub_paths() {
    let mut menu = Builder::new("main", MenuConfig::no_cache(), env_at("http://localhost/about/team"));
    menu.add("About", "about").unwrap();

    assert!(active_titles(&menu).is_empty());
}

#[test]
fn test_auto_activate_can_be_disabled() {
    let config = MenuConfig::no_cache().with_auto_activate(false);
    let mut menu = Builder::new("main", config, env_at("http://localhost/about"));
    menu.add("About", "about").unwrap();

    assert!(active_titles(&menu).is_empty());
}

// ============================================================================
// Restful Matching
// ============================================================================

#[test]
fn test_restful_match_with_rest_base() {
    let config = restful().with_rest_base("admin");
    let mut menu = Builder::new("admin", config, env_at("http://localhost/admin/users/5"));
    menu.add("Users", "admin/users").unwrap();
    menu.add("Posts", "admin/posts").unwrap();

    assert_eq!(active_titles(&menu), vec!["Users"]);
}

#[test]
fn test_restful_match_requires_a_segment_boundary() {
    let mut menu = Builder::new("main", restful(), env_at("http://localhost/usersettings"));
    menu.add("Users", "users").unwrap();

    assert!(active_titles(&menu).is_empty());
}

#[test]
fn test_restful_match_with_any_of_several_bases() {
    let config = restful().with_rest_base(RestBase::Many(vec!["admin".into(), "api/v1".into()]));
    let mut menu = Builder::new("main", config, env_at("http://localhost/api/v1/orders/12/edit"));
    menu.add("Orders", "admin/orders").unwrap();

    assert_eq!(active_titles(&menu), vec!["Orders"]);
}

#[test]
fn test_restful_root_item_only_matches_root() {
    let mut menu = Builder::new("main", restful(), env_at("http://localhost/blog"));
    menu.add("Home", "/").unwrap();
    menu.add("Blog", "blog").unwrap();

    assert_eq!(active_titles(&menu), vec!["Blog"]);
}

// ============================================================================
// Parent Activation
// ============================================================================

#[test]
fn test_depth_three_leaf_activates_ancestors() {
    let mut menu = Builder::new("main", MenuConfig::no_cache(), env_at("http://localhost/docs/guide/install"));
    let docs = menu.add("Docs", "docs").unwrap().id();
    let guide = menu.add("Guide", ItemOptions::url("docs/guide").parent(docs)).unwrap().id();
    menu.add("Install", ItemOptions::url("docs/guide/install").parent(guide))
        .unwrap();
    menu.add("Blog", "blog").unwrap();

    assert_eq!(active_titles(&menu), vec!["Docs", "Guide", "Install"]);

    menu.activate(ItemId(3)).unwrap();
    assert_eq!(active_titles(&menu), vec!["Docs", "Guide", "Install"]);
    for id in [1, 2, 3] {
        assert_eq!(menu.find(ItemId(id)).unwrap().attr("class"), Some("active"));
    }
}

#[test]
fn test_parents_stay_inactive_when_disabled() {
    let config = MenuConfig::no_cache().with_activate_parents(false);
    let mut menu = Builder::new("main", config, env_at("http://localhost/docs/guide"));
    let docs = menu.add("Docs", "docs").unwrap().id();
    menu.add("Guide", ItemOptions::url("docs/guide").parent(docs)).unwrap();

    assert_eq!(active_titles(&menu), vec!["Guide"]);
}

#[test]
fn test_link_element_receives_the_class() {
    let config = MenuConfig::no_cache()
        .with_active_element(ActiveElement::Link)
        .with_active_class("current");
    let mut menu = Builder::new("main", config, env_at("http://localhost/about"));
    menu.add("About", "about").unwrap();

    let item = menu.get("about").unwrap();
    let link = item.link().unwrap();
    assert!(item.is_active());
    assert!(link.is_active());
    assert_eq!(item.attr("class"), None);
    assert_eq!(link.attributes().get("class").map(String::as_str), Some("current"));
}

#[test]
fn test_link_element_falls_back_to_raw_items() {
    let config = MenuConfig::no_cache().with_active_element(ActiveElement::Link);
    let mut menu = Builder::new("main", config, env_at("http://localhost/docs/intro"));
    let section = menu.raw("Section", ItemOptions::new()).unwrap().id();
    menu.add("Intro", ItemOptions::url("docs/intro").parent(section)).unwrap();

    assert_eq!(menu.find(section).unwrap().attr("class"), Some("active"));
}

// ============================================================================
// Manual Activation
// ============================================================================

#[test]
fn test_active_when_matches_wildcard_patterns() {
    let mut menu = Builder::new("main", MenuConfig::no_cache(), env_at("http://localhost/admin/users/5"));
    let admin = menu.add("Admin", "admin").unwrap().active_when("/admin/*").unwrap().id();
    let blog = menu.add("Blog", "blog").unwrap().active_when("blog/*").unwrap().id();

    assert!(menu.find(admin).unwrap().is_active());
    assert!(!menu.find(blog).unwrap().is_active());
}

#[test]
fn test_manual_active_cascades_and_is_idempotent() {
    let config = MenuConfig::no_cache().with_auto_activate(false);
    let mut menu = Builder::new("main", config, env_at("http://localhost/"));
    let parent = menu.add("Parent", "parent").unwrap().class("nav").id();
    let child = menu.add("Child", ItemOptions::url("child").parent(parent)).unwrap().id();

    menu.item_mut(child).unwrap().active().unwrap().active().unwrap();

    assert_eq!(active_titles(&menu), vec!["Parent", "Child"]);
    assert_eq!(menu.find(parent).unwrap().attr("class"), Some("nav active"));
}

#[test]
fn test_active_on_a_filtered_item_reports_it() {
    let config = MenuConfig::no_cache().with_auto_activate(false);
    let mut menu = Builder::new("main", config, env_at("http://localhost/"));
    let result = menu
        .add("Old", "old")
        .unwrap()
        .group(navmenu_lib::GroupScope::new(), |menu| {
            menu.filter(|item| item.title() != "Old");
            Ok(())
        })
        .unwrap()
        .active();

    assert!(matches!(result, Err(MenuError::ItemNotFound(ItemId(1)))));
    assert!(active_titles(&menu).is_empty());
}

#[test]
fn test_activate_unknown_item_fails() {
    let mut menu = Builder::new("main", MenuConfig::no_cache(), env_at("http://localhost/"));
    assert!(matches!(menu.activate(ItemId(7)), Err(MenuError::ItemNotFound(ItemId(7)))));
}
