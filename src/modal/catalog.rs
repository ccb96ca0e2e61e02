use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceId {
    Web,
    Ia,
    Apps,
    Software,
}

impl ServiceId {
    pub const ALL: [ServiceId; 4] = [ServiceId::Web, ServiceId::Ia, ServiceId::Apps, ServiceId::Software];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceId::Web => "web",
            ServiceId::Ia => "ia",
            ServiceId::Apps => "apps",
            ServiceId::Software => "software",
        }
    }

    pub fn entry(&self) -> &'static ServiceEntry {
        match self {
            ServiceId::Web => &WEB,
            ServiceId::Ia => &IA,
            ServiceId::Apps => &APPS,
            ServiceId::Software => &SOFTWARE,
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownService(pub String);

impl FromStr for ServiceId {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub theme: &'static str,
    pub title: &'static str,
    pub slides: &'static [Slide],
}

static WEB: ServiceEntry = ServiceEntry {
    theme: "theme-web",
    title: "Desarrollo Web",
    slides: &[
        Slide {
            title: "Paginas Web informativas",
            description: "Muestran información clara y esencial.",
        },
        Slide {
            title: "Evolucion Web",
            description: "Rediseño y actualización para una web moderna y fácil de usar.",
        },
        Slide {
            title: "Paginas web corporativas",
            description: "Presentan la identidad y servicios de una empresa.",
        },
        Slide {
            title: "Landing pages",
            description: "Páginas web diseñadas para negocios y proyectos que buscan atraer y convertir clientes.",
        },
    ],
};

static IA: ServiceEntry = ServiceEntry {
    theme: "theme-ia",
    title: "Agentes de IA",
    slides: &[
        Slide {
            title: "Chatbots inteligentes",
            description: "Responden consultas automáticamente, 24/7, de forma rápida y precisa.",
        },
        Slide {
            title: "Automatizacion con IA",
            description: "Optimiza procesos repetitivos usando inteligencia artificial para ahorrar tiempo y recursos.",
        },
    ],
};

static APPS: ServiceEntry = ServiceEntry {
    theme: "theme-apps",
    title: "Desarrollo de Aplicaciones",
    slides: &[
        Slide {
            title: "Aplicaciones móviles",
            description: "Apps para Android y iOS enfocadas en usabilidad y rendimiento.",
        },
        Slide {
            title: "Evolucion de Aplicacion",
            description: "Optimización de diseño y rendimiento para una mejor experiencia.",
        },
        Slide {
            title: "Prototipos funcionales",
            description: "Versiones iniciales para validar ideas y funcionalidades.",
        },
    ],
};

static SOFTWARE: ServiceEntry = ServiceEntry {
    theme: "theme-software",
    title: "Desarrollo de Software",
    slides: &[
        Slide {
            title: "Software a la medida",
            description: "Soluciones diseñadas específicamente para las necesidades del negocio.",
        },
        Slide {
            title: "Evolucion de Software",
            description: "Mejora de interfaz y estructura para mayor eficiencia.",
        },
        Slide {
            title: "Sistemas de gestion",
            description: "Control y administración eficiente de procesos y recursos.",
        },
    ],
};

pub struct TechBadge {
    pub icon: &'static str,
    pub name: &'static str,
}

/// Stack shown on every project detail panel.
pub const PROJECT_STACK: &[TechBadge] = &[
    TechBadge { icon: "fa-html5", name: "HTML5" },
    TechBadge { icon: "fa-css3-alt", name: "CSS3" },
    TechBadge { icon: "fa-js", name: "JavaScript" },
    TechBadge { icon: "fa-react", name: "React" },
];

pub const PROJECT_BLURB: &str = "Este proyecto representa una solución integral desarrollada por ReCode+. \
Implementamos tecnologías modernas, optimización SEO y una experiencia de usuario (UX) diseñada para \
convertir visitantes en clientes fieles.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_their_tags() {
        for id in ServiceId::ALL {
            assert_eq!(id.as_str().parse::<ServiceId>(), Ok(id));
        }
        assert_eq!("seo".parse::<ServiceId>(), Err(UnknownService("seo".to_string())));
    }

    #[test]
    fn every_entry_has_slides_and_a_theme() {
        for id in ServiceId::ALL {
            let entry = id.entry();
            assert!(!entry.slides.is_empty());
            assert_eq!(entry.theme, format!("theme-{}", id));
        }
        assert_eq!(ServiceId::Ia.entry().slides.len(), 2);
        assert_eq!(ServiceId::Web.entry().slides.len(), 4);
    }
}
