//! End-to-end partitioning and alternate link scenarios.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use tongues_site::{
    AlternateLinkRewriter, I18nSite, Locale, LocaleRegistry, NavEntry, NavNode,
    NavigationPartitioner, NavTarget, Page, PartitionError,
};

fn page(lang: &str, name: &str) -> Page {
    let url = if name == "index" {
        format!("/{lang}/")
    } else {
        format!("/{lang}/{name}/")
    };
    Page::new(format!("{lang}/{name}.md"), url, format!("{lang}/{name}"))
}

fn three_locales() -> Vec<Locale> {
    vec![Locale::new("en"), Locale::new("zh"), Locale::new("fr")]
}

/// en/index, en/guide, zh/index, zh/guide, fr/index.
fn scenario_pages() -> Vec<Page> {
    vec![
        page("en", "index"),
        page("en", "guide"),
        page("zh", "index"),
        page("zh", "guide"),
        page("fr", "index"),
    ]
}

/// Mixed tree grouping pages by topic rather than by language.
fn scenario_nav(pages: &[Page]) -> Vec<NavNode> {
    vec![
        NavNode::section(
            "Home",
            vec![
                NavNode::Page(pages[0].clone()),
                NavNode::Page(pages[2].clone()),
                NavNode::Page(pages[4].clone()),
            ],
        ),
        NavNode::section(
            "Guide",
            vec![
                NavNode::Page(pages[1].clone()),
                NavNode::Page(pages[3].clone()),
            ],
        ),
        NavNode::link("Source", "https://example.com/repo"),
    ]
}

fn titles(pages: &[Page]) -> Vec<&str> {
    pages.iter().map(|p| p.title.as_str()).collect()
}

#[test]
fn test_zh_navigation_and_alternates() {
    let pages = scenario_pages();
    let site = I18nSite::build(three_locales(), &scenario_nav(&pages), &pages).unwrap();

    let zh = site.navigation("zh").unwrap();
    assert_eq!(titles(zh.pages()), ["zh/index", "zh/guide"]);

    let alternates = site.alternates_for(&pages[3]).unwrap();
    let links: Vec<_> = alternates
        .iter()
        .map(|alt| (alt.lang.as_str(), alt.link.as_str()))
        .collect();
    assert_eq!(
        links,
        [("en", "/en/guide/"), ("zh", "/zh/guide/"), ("fr", "/fr/")]
    );
}

#[test]
fn test_every_page_lands_in_exactly_its_own_locale() {
    let mut pages = scenario_pages();
    pages.push(Page::new("index.md", "/", "Root"));
    let registry = LocaleRegistry::new(three_locales()).unwrap();
    let nav: Vec<_> = pages.iter().cloned().map(NavNode::Page).collect();

    let partition = NavigationPartitioner::new(&registry).build_all(&nav, &pages);

    for page in &pages {
        let owner = registry.resolve(&page.source_path).map(|l| l.lang.as_str());
        for nav in partition.navigations() {
            let listed = nav.pages().contains(page);
            assert_eq!(listed, owner == Some(nav.lang()), "{page:?} in {}", nav.lang());
        }
    }
    assert_eq!(partition.unresolved().len(), 1);
}

#[test]
fn test_ordered_pages_are_subsequence_of_site_pages() {
    let pages = scenario_pages();
    let registry = LocaleRegistry::new(three_locales()).unwrap();
    let nav: Vec<_> = pages.iter().cloned().map(NavNode::Page).collect();

    let partition = NavigationPartitioner::new(&registry).build_all(&nav, &pages);

    for nav in partition.navigations() {
        let expected: Vec<_> = pages
            .iter()
            .filter(|p| {
                registry.resolve(&p.source_path).map(|l| l.lang.as_str()) == Some(nav.lang())
            })
            .cloned()
            .collect();
        assert_eq!(nav.pages(), expected.as_slice());
    }
}

#[test]
fn test_build_all_is_deterministic() {
    let pages = scenario_pages();
    let nav = scenario_nav(&pages);
    let registry = LocaleRegistry::new(three_locales()).unwrap();
    let partitioner = NavigationPartitioner::new(&registry);

    let first = partitioner.build_all(&nav, &pages);
    for _ in 0..5 {
        let again = partitioner.build_all(&nav, &pages);
        for (a, b) in first.navigations().iter().zip(again.navigations()) {
            assert_eq!(a.lang(), b.lang());
            assert_eq!(a.items(), b.items());
            assert_eq!(a.pages(), b.pages());
        }
    }
}

#[test]
fn test_alternate_tails_agree_across_locales() {
    let mut pages = scenario_pages();
    pages.push(page("fr", "guide"));
    let registry = LocaleRegistry::new(three_locales()).unwrap();
    let rewriter = AlternateLinkRewriter::new(&pages);

    for page in &pages {
        let own = registry.resolve(&page.source_path).unwrap();
        let own_tail = page.url.strip_prefix(own.link.as_str()).unwrap_or_default();
        let set = rewriter.alternates_for(page, &registry).unwrap();
        for alt in &set {
            let locale = registry.get(&alt.lang).unwrap();
            let tail = alt.link.strip_prefix(locale.link.as_str()).unwrap();
            assert_eq!(tail, own_tail, "{} -> {}", page.url, alt.link);
        }
    }
}

#[test]
fn test_locale_without_pages_is_empty_not_error() {
    let pages = scenario_pages();
    let mut locales = three_locales();
    locales.push(Locale::new("de"));

    let site = I18nSite::build(locales, &scenario_nav(&pages), &pages).unwrap();

    assert!(site.partition().is_complete());
    let de = site.navigation("de").unwrap();
    assert!(de.pages().is_empty());
    // Only the locale-agnostic link survives
    assert_eq!(de.items(), &[NavNode::link("Source", "https://example.com/repo")]);
}

#[test]
fn test_custom_nav_order_overrides_site_tree() {
    let pages = vec![
        page("zh", "index"),
        page("zh", "intro"),
        page("zh", "install"),
        page("zh", "faq"),
        page("en", "index"),
    ];
    let custom = vec![
        NavEntry::Reference("zh/faq.md".to_owned()),
        NavEntry::Titled(BTreeMap::from([(
            "指南".to_owned(),
            NavTarget::Children(vec![
                NavEntry::Reference("zh/install.md".to_owned()),
                NavEntry::Reference("zh/intro.md".to_owned()),
            ]),
        )])),
        NavEntry::Reference("zh/index.md".to_owned()),
    ];
    let locales = vec![Locale::new("en"), Locale::new("zh").with_nav(custom)];
    let site_nav: Vec<_> = pages.iter().cloned().map(NavNode::Page).collect();

    let site = I18nSite::build(locales, &site_nav, &pages).unwrap();

    let zh = site.navigation("zh").unwrap();
    assert_eq!(
        titles(zh.pages()),
        ["zh/faq", "zh/install", "zh/intro", "zh/index"]
    );
    assert_eq!(zh.parent("/zh/intro/").unwrap().title, "指南");
    assert_eq!(zh.next_page("/zh/faq/").unwrap().title, "zh/install");
    // The filtered locale is unaffected
    assert_eq!(titles(site.navigation("en").unwrap().pages()), ["en/index"]);
}

#[test]
fn test_custom_nav_with_foreign_reference_fails_only_that_locale() {
    let pages = scenario_pages();
    let custom = vec![
        NavEntry::Reference("zh/index.md".to_owned()),
        NavEntry::Reference("en/guide.md".to_owned()),
    ];
    let locales = vec![
        Locale::new("en"),
        Locale::new("zh").with_nav(custom),
        Locale::new("fr"),
    ];

    let site = I18nSite::build(locales, &scenario_nav(&pages), &pages).unwrap();

    assert_eq!(
        site.partition().failures(),
        &[PartitionError::UnknownPageReference {
            lang: "zh".to_owned(),
            reference: "en/guide.md".to_owned(),
            owner: Some("en".to_owned()),
        }]
    );
    assert!(site.navigation("zh").is_none());
    assert!(site.navigation("en").is_some());
    assert!(site.navigation("fr").is_some());
}

#[test]
fn test_page_contexts_can_be_computed_in_parallel() {
    use rayon::prelude::*;

    let pages = scenario_pages();
    let site = I18nSite::build(three_locales(), &scenario_nav(&pages), &pages).unwrap();

    let langs: Vec<_> = pages
        .par_iter()
        .map(|page| site.page_context(page).lang.map(str::to_owned))
        .collect();

    assert_eq!(
        langs,
        ["en", "en", "zh", "zh", "fr"].map(|l| Some(l.to_owned()))
    );
}
