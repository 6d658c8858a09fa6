//! Service catalog and card selection for the diensten page.

pub struct Logo {
    pub src: &'static str,
    pub alt: &'static str,
    pub class: Option<&'static str>,
}

pub struct Service {
    pub title: &'static str,
    pub text: &'static str,
    pub logos: &'static [Logo],
}

const NEXTJS: Logo = Logo { src: "public/Diensten Logos/Nextjs-logo.svg.png", alt: "Next.js", class: None };
const REACT: Logo = Logo { src: "public/Diensten Logos/react-js.png", alt: "React", class: None };
const NODE: Logo = Logo { src: "public/Diensten Logos/Node.js_logo_2015.svg.png", alt: "Node.js", class: None };
const VERCEL: Logo = Logo { src: "public/Diensten Logos/pngwing.com.png", alt: "Vercel", class: Some("vercel-logo") };

pub static SERVICES: [Service; 5] = [
    Service {
        title: "Websites",
        text: "Professionele websites die perfect aansluiten bij jouw bedrijf en doelgroep. Van eenvoudige bedrijfspagina's tot complexe webapplicaties.",
        logos: &[NEXTJS, REACT, NODE, VERCEL],
    },
    Service {
        title: "Webshops",
        text: "Complete e-commerce oplossingen om jouw producten online te verkopen. Van productcatalogus tot betalingssysteem en voorraadbeheer.",
        logos: &[
            Logo { src: "public/Diensten Logos/Shopify_logo_2018.svg.png", alt: "Shopify", class: None },
            NEXTJS,
            REACT,
            VERCEL,
        ],
    },
    Service {
        title: "Apps",
        text: "Mobiele en web applicaties die jouw bedrijf naar het volgende niveau tillen. Native iOS, Android en cross-platform oplossingen.",
        logos: &[
            Logo { src: "public/Diensten Logos/App_Store_(iOS)-Badge-Alternative-Logo.wine.svg", alt: "iOS App Store", class: None },
            Logo { src: "public/Diensten Logos/pngwing.com.png", alt: "Android", class: None },
            Logo { src: "public/Diensten Logos/react-js.png", alt: "React Native", class: None },
        ],
    },
    Service {
        title: "Webtools",
        text: "Praktische tools die jouw dagelijkse werkzaamheden vereenvoudigen. Van dashboards tot automatisering en integraties.",
        logos: &[NEXTJS, REACT, NODE],
    },
    Service {
        title: "Workflows",
        text: "Slimme workflows die jouw processen optimaliseren. Van workflow automatisering tot data-integratie en API-koppelingen.",
        logos: &[
            Logo { src: "public/Diensten Logos/N8n-logo-new.svg", alt: "N8N", class: None },
            Logo { src: "public/Diensten Logos/Firebase-Logo.png", alt: "Firebase", class: None },
            NODE,
        ],
    },
];

impl Logo {
    pub fn class_name(&self) -> String {
        match self.class {
            Some(extra) => format!("dienst-logo {}", extra),
            None => "dienst-logo".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Desktop click on the already active card.
    Unchanged,
    /// Desktop: card became active; move the label and swap the description.
    Activated(usize),
    /// Mobile: card opened its description.
    Expanded(usize),
    /// Mobile: the open card was clicked again.
    Collapsed,
}

#[derive(Clone, Copy, Debug)]
pub struct ServiceSelector {
    active: Option<usize>,
    count: usize,
}

impl ServiceSelector {
    pub fn new(count: usize) -> Self {
        Self {
            active: (count > 0).then_some(0),
            count,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn select(&mut self, index: usize, mobile: bool) -> Selection {
        if index >= self.count {
            return Selection::Unchanged;
        }
        if mobile {
            if self.active == Some(index) {
                self.active = None;
                Selection::Collapsed
            } else {
                self.active = Some(index);
                Selection::Expanded(index)
            }
        } else if self.active == Some(index) {
            Selection::Unchanged
        } else {
            self.active = Some(index);
            Selection::Activated(index)
        }
    }
}
