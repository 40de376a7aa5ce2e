//! The NeuroVerse site: registered pages and the navigation menu.
//!
//! Every page registers its own hero anchor here. Industry pages open with a
//! banner-style overview instead of a section with the `hero` id, so they
//! register `landmark_or_first` rather than relying on URL matching.

use super::hero::HeroAnchor;
use super::layout::{PageLayout, Section};
use crate::model::{
    FeaturedPanel, MegaMenuPanel, MenuItem, MenuKey, MenuLink, NavMenu, PromoPanel, RoutePath,
    SectionId,
};

/// A routable page and its hero registration.
#[derive(Debug, Clone)]
pub struct PageDefinition {
    /// Route the page is mounted at.
    pub route: RoutePath,
    /// Document title.
    pub title: String,
    /// Section stack.
    pub layout: PageLayout,
    /// How the navbar finds this page's hero.
    pub hero: HeroAnchor,
}

/// All pages of the site plus the navigation menu.
#[derive(Debug, Clone)]
pub struct SiteCatalog {
    pages: Vec<PageDefinition>,
    menu: NavMenu,
}

impl SiteCatalog {
    /// Build a catalog from explicit pages and menu.
    pub fn new(pages: Vec<PageDefinition>, menu: NavMenu) -> Self {
        Self { pages, menu }
    }

    /// Page mounted at `route`.
    pub fn page(&self, route: &RoutePath) -> Option<&PageDefinition> {
        self.pages.iter().find(|p| &p.route == route)
    }

    /// True when a page is registered for `route`.
    pub fn contains(&self, route: &RoutePath) -> bool {
        self.page(route).is_some()
    }

    /// Registered pages in definition order.
    pub fn pages(&self) -> &[PageDefinition] {
        &self.pages
    }

    /// The navigation menu.
    pub fn menu(&self) -> &NavMenu {
        &self.menu
    }

    /// The production site.
    pub fn neuroverse() -> Self {
        let hero = || SectionId::from_static("hero");

        let pages = vec![
            page(
                "/",
                "NeuroVerse - Intelligence, engineered",
                &[
                    ("hero", "Intelligence, engineered", 800),
                    ("platform", "One platform for applied AI", 640),
                    ("industries", "Built for regulated industries", 720),
                    ("showcase", "See it in motion", 640),
                    ("testimonials", "What our partners say", 480),
                    ("footer", "NeuroVerse", 320),
                ],
                HeroAnchor::landmark(hero()),
            ),
            page(
                "/insights",
                "Insights",
                &[
                    ("breadcrumbs", "Home / Insights", 96),
                    ("hero", "Research & perspectives", 704),
                    ("articles", "Latest articles", 1280),
                    ("newsletter", "Stay in the loop", 320),
                    ("footer", "NeuroVerse", 320),
                ],
                HeroAnchor::landmark(hero()),
            ),
            page(
                "/industries/healthcare",
                "Healthcare",
                &[
                    ("overview", "AI for clinical operations", 736),
                    ("challenges", "Challenges we solve", 640),
                    ("case-studies", "Case studies", 800),
                    ("footer", "NeuroVerse", 320),
                ],
                HeroAnchor::landmark_or_first(hero()),
            ),
            page(
                "/industries/finance",
                "Financial services",
                &[
                    ("overview", "Risk models you can audit", 736),
                    ("challenges", "Challenges we solve", 640),
                    ("case-studies", "Case studies", 800),
                    ("footer", "NeuroVerse", 320),
                ],
                HeroAnchor::landmark_or_first(hero()),
            ),
            page(
                "/industries/manufacturing",
                "Manufacturing",
                &[
                    ("overview", "Predictive maintenance at scale", 736),
                    ("challenges", "Challenges we solve", 640),
                    ("case-studies", "Case studies", 800),
                    ("footer", "NeuroVerse", 320),
                ],
                HeroAnchor::landmark_or_first(hero()),
            ),
            page(
                "/solutions/analytics",
                "Analytics",
                &[
                    ("hero", "Decision intelligence", 768),
                    ("capabilities", "Capabilities", 960),
                    ("footer", "NeuroVerse", 320),
                ],
                HeroAnchor::landmark(hero()),
            ),
            page(
                "/solutions/automation",
                "Automation",
                &[
                    ("hero", "Workflows that learn", 768),
                    ("capabilities", "Capabilities", 960),
                    ("footer", "NeuroVerse", 320),
                ],
                HeroAnchor::landmark(hero()),
            ),
            page(
                "/careers",
                "Careers",
                &[
                    ("hero", "Build what comes next", 800),
                    ("values", "How we work", 640),
                    ("openings", "Open roles", 1120),
                    ("footer", "NeuroVerse", 320),
                ],
                HeroAnchor::landmark(hero()),
            ),
            page(
                "/contact",
                "Contact",
                &[
                    ("form", "Talk to our team", 960),
                    ("offices", "Our offices", 480),
                    ("footer", "NeuroVerse", 320),
                ],
                HeroAnchor::None,
            ),
        ];

        Self::new(pages, neuroverse_menu())
    }
}

fn page(
    route: &'static str,
    title: &str,
    sections: &[(&'static str, &str, u32)],
    hero: HeroAnchor,
) -> PageDefinition {
    let sections = sections
        .iter()
        .map(|&(id, title, height)| Section::new(SectionId::from_static(id), title, height))
        .collect();
    PageDefinition {
        route: RoutePath::from_static(route),
        title: title.to_string(),
        layout: PageLayout::new(sections),
        hero,
    }
}

fn link(label: &str, path: &'static str) -> MenuLink {
    MenuLink::new(label, RoutePath::from_static(path))
}

fn neuroverse_menu() -> NavMenu {
    NavMenu::new(vec![
        MenuItem {
            key: MenuKey::from_static("industries"),
            label: "Industries".to_string(),
            path: RoutePath::from_static("/industries/healthcare"),
            section: RoutePath::from_static("/industries"),
            panel: Some(MegaMenuPanel {
                promo: PromoPanel {
                    title: "Industry solutions".to_string(),
                    blurb: "Domain models tuned for regulated work.".to_string(),
                    cta: link("Explore industries", "/industries/healthcare"),
                },
                links: vec![
                    link("Healthcare", "/industries/healthcare"),
                    link("Financial services", "/industries/finance"),
                    link("Manufacturing", "/industries/manufacturing"),
                ],
                featured: FeaturedPanel {
                    title: "Case study".to_string(),
                    summary: "Cutting triage time by 40%.".to_string(),
                    link: link("Read the story", "/insights"),
                },
            }),
        },
        MenuItem {
            key: MenuKey::from_static("solutions"),
            label: "Solutions".to_string(),
            path: RoutePath::from_static("/solutions/analytics"),
            section: RoutePath::from_static("/solutions"),
            panel: Some(MegaMenuPanel {
                promo: PromoPanel {
                    title: "The platform".to_string(),
                    blurb: "From raw signals to decisions.".to_string(),
                    cta: link("Book a demo", "/contact"),
                },
                links: vec![
                    link("Analytics", "/solutions/analytics"),
                    link("Automation", "/solutions/automation"),
                ],
                featured: FeaturedPanel {
                    title: "New".to_string(),
                    summary: "Workflow agents are generally available.".to_string(),
                    link: link("What's new", "/insights"),
                },
            }),
        },
        MenuItem {
            key: MenuKey::from_static("insights"),
            label: "Insights".to_string(),
            path: RoutePath::from_static("/insights"),
            section: RoutePath::from_static("/insights"),
            panel: None,
        },
        MenuItem {
            key: MenuKey::from_static("careers"),
            label: "Careers".to_string(),
            path: RoutePath::from_static("/careers"),
            section: RoutePath::from_static("/careers"),
            panel: None,
        },
        MenuItem {
            key: MenuKey::from_static("contact"),
            label: "Contact".to_string(),
            path: RoutePath::from_static("/contact"),
            section: RoutePath::from_static("/contact"),
            panel: None,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::hero::resolve_hero;

    fn route(p: &str) -> RoutePath {
        RoutePath::new(p).unwrap()
    }

    #[test]
    fn every_menu_link_targets_a_registered_page() {
        let site = SiteCatalog::neuroverse();
        for item in site.menu().items() {
            assert!(site.contains(&item.path), "missing page for {}", item.path);
            if let Some(panel) = &item.panel {
                for link in panel.all_links() {
                    assert!(site.contains(&link.path), "missing page for {}", link.path);
                }
            }
        }
    }

    #[test]
    fn industry_pages_fall_back_to_first_section() {
        let site = SiteCatalog::neuroverse();
        let healthcare = site.page(&route("/industries/healthcare")).unwrap();
        let hero = resolve_hero(&healthcare.layout, &healthcare.hero).unwrap();
        assert_eq!(hero.top, 0.0);
        assert_eq!(hero.bottom, 736.0);
    }

    #[test]
    fn insights_hero_is_below_breadcrumbs() {
        let site = SiteCatalog::neuroverse();
        let insights = site.page(&route("/insights")).unwrap();
        let hero = resolve_hero(&insights.layout, &insights.hero).unwrap();
        assert_eq!(hero.top, 96.0);
        assert_eq!(hero.bottom, 800.0);
    }

    #[test]
    fn contact_page_has_no_hero() {
        let site = SiteCatalog::neuroverse();
        let contact = site.page(&route("/contact")).unwrap();
        assert!(resolve_hero(&contact.layout, &contact.hero).is_none());
    }

    #[test]
    fn home_hero_spans_first_800_pixels() {
        let site = SiteCatalog::neuroverse();
        let home = site.page(&RoutePath::root()).unwrap();
        let hero = resolve_hero(&home.layout, &home.hero).unwrap();
        assert_eq!(hero.bottom, 800.0);
    }
}
