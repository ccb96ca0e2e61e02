use yew::prelude::*;

use crate::components::backdrop::{ClickRipples, CustomCursor, ScrollProgress, Starfield};
use crate::components::contact_form::ContactFormWidget;
use crate::components::navbar::SmartNavbar;
use crate::components::notice::NoticeToast;
use crate::components::preloader::Hero;
use crate::components::reveal::{Reveal, ThemeSection};
use crate::components::service_modal::{use_modal, ServiceModal};
use crate::components::stat_counter::StatCounter;
use crate::components::tilt_card::TiltCard;
use crate::contact::form::Notice;
use crate::contact::mailer::MailerHandle;
use crate::effects::reveal::RevealMode;
use crate::modal::catalog::ServiceId;
use crate::modal::state::ProjectDetail;

const STAGGER_MS: u32 = 150;

struct ServiceCard {
    id: ServiceId,
    icon: &'static str,
    blurb: &'static str,
}

const SERVICES: &[ServiceCard] = &[
    ServiceCard { id: ServiceId::Web, icon: "🌐", blurb: "Sitios rápidos, modernos y pensados para convertir." },
    ServiceCard { id: ServiceId::Ia, icon: "🤖", blurb: "Agentes que atienden y automatizan por ti." },
    ServiceCard { id: ServiceId::Apps, icon: "📱", blurb: "Aplicaciones móviles con foco en la experiencia." },
    ServiceCard { id: ServiceId::Software, icon: "🛠️", blurb: "Sistemas a la medida de tu operación." },
];

struct ProjectCard {
    title: &'static str,
    meta: &'static str,
    thumb: &'static str,
}

const PROJECTS: &[ProjectCard] = &[
    ProjectCard { title: "Nova Store", meta: "E-commerce", thumb: "project-thumb thumb-blue" },
    ProjectCard { title: "Clinica Vital", meta: "Landing page", thumb: "project-thumb thumb-green" },
    ProjectCard { title: "Atlas ERP", meta: "Software de gestion", thumb: "project-thumb thumb-purple" },
    ProjectCard { title: "Bot Aurora", meta: "Agente de IA", thumb: "project-thumb thumb-orange" },
];

const ABOUT: &[&str] = &[
    "Somos un equipo que convierte ideas en productos digitales.",
    "Diseñamos, desarrollamos y acompañamos cada proyecto de principio a fin.",
    "Creemos en el código limpio, la comunicación directa y los resultados medibles.",
];

const TECHNOLOGIES: &[(&str, &str)] = &[
    ("fa-html5", "HTML5"),
    ("fa-css3-alt", "CSS3"),
    ("fa-js", "JavaScript"),
    ("fa-react", "React"),
    ("fa-node-js", "Node.js"),
    ("fa-python", "Python"),
    ("fa-rust", "Rust"),
    ("fa-figma", "Figma"),
];

const SOCIALS: &[(&str, &str, &str)] = &[
    ("card-x", "fa-x-twitter", "X"),
    ("card-tiktok", "fa-tiktok", "TikTok"),
    ("card-instagram", "fa-instagram", "Instagram"),
    ("card-facebook", "fa-facebook", "Facebook"),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Mail delivery for the contact form; EmailJS unless overridden.
    #[prop_or_else(MailerHandle::from_config)]
    pub mailer: MailerHandle,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let modal = use_modal();
    let notice = use_state(|| None::<Notice>);

    let on_notice = {
        let notice = notice.clone();
        Callback::from(move |n: Notice| notice.set(Some(n)))
    };
    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let service_cards = SERVICES.iter().enumerate().map(|(i, card)| {
        let modal = modal.clone();
        let tag = card.id.as_str();
        let side = if i % 2 == 0 { "from-left" } else { "from-right" };
        html! {
            <Reveal class={classes!("servicio-feature", side)} delay_ms={i as u32 * STAGGER_MS}>
                <div class="icon">{card.icon}</div>
                <h3>{card.id.entry().title}</h3>
                <p>{card.blurb}</p>
                <button class="btn-explorar" data-service={tag}
                    onclick={Callback::from(move |_: MouseEvent| modal.open_service(tag))}>
                    {"Explorar"}
                </button>
            </Reveal>
        }
    });

    let project_cards = PROJECTS.iter().enumerate().map(|(i, card)| {
        let modal = modal.clone();
        let open = Callback::from(move |_: MouseEvent| {
            modal.open_project(ProjectDetail::from_card(card.title, card.meta, card.thumb));
        });
        html! {
            <Reveal class="project-card" delay_ms={i as u32 * STAGGER_MS}>
                <TiltCard>
                    <div class={card.thumb}></div>
                    <div class="project-title">{card.title}</div>
                    <div class="project-meta">{card.meta}</div>
                    <button class="project-open" onclick={open}>{"Ver proyecto"}</button>
                </TiltCard>
            </Reveal>
        }
    });

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Starfield />
            <ScrollProgress />
            <CustomCursor />
            <ClickRipples />
            <SmartNavbar />

            <ThemeSection id="home" class="hero-section">
                <Hero />
            </ThemeSection>

            <ThemeSection id="servicios" class="servicios-section">
                <Reveal class="bi-anim-title"><h2>{"Servicios"}</h2></Reveal>
                <div class="servicios-grid">{ for service_cards }</div>
            </ThemeSection>

            <ThemeSection id="portafolio" class="portafolio-section">
                <Reveal class="bi-anim-title"><h2>{"Portafolio"}</h2></Reveal>
                <div class="projects-grid">{ for project_cards }</div>
            </ThemeSection>

            <ThemeSection id="acerca" class="acerca-section">
                <Reveal class="bi-anim-title"><h2>{"Acerca de nosotros"}</h2></Reveal>
                <div class="acerca-text">
                    { for ABOUT.iter().enumerate().map(|(i, text)| html! {
                        <Reveal mode={RevealMode::ReverseOnly}
                            class={if i % 2 == 0 { "from-left" } else { "from-right" }}>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </ThemeSection>

            <ThemeSection id="tecnologias" class="tecnologias-section">
                <Reveal class="bi-anim-title"><h2>{"Tecnologías"}</h2></Reveal>
                <div class="tech-grid-premium">
                    { for TECHNOLOGIES.iter().enumerate().map(|(i, (icon, name))| html! {
                        <Reveal class="tech-card flip" delay_ms={i as u32 * 50}>
                            <i class={classes!("fa-brands", *icon)}></i>
                            <span>{*name}</span>
                        </Reveal>
                    }) }
                </div>
            </ThemeSection>

            <ThemeSection id="conecta" class="conecta-section">
                <Reveal class="bi-anim-title"><h2>{"Conecta"}</h2></Reveal>
                <div class="redes-grid-3d">
                    { for SOCIALS.iter().enumerate().map(|(i, (class, icon, name))| html! {
                        <Reveal mode={RevealMode::ReverseOnly}
                            class={classes!("social-3d-card", *class)} delay_ms={i as u32 * 200}>
                            <i class={classes!("fa-brands", *icon)}></i>
                            <span>{*name}</span>
                        </Reveal>
                    }) }
                </div>
            </ThemeSection>

            <ThemeSection id="contacto" class="contacto-section">
                <Reveal class="bi-anim-title"><h2>{"Contacto"}</h2></Reveal>
                <div class="stats-row">
                    <StatCounter target="50" suffix="+" label="Proyectos entregados" />
                    <StatCounter target="98" suffix="%" label="Clientes satisfechos" />
                    <StatCounter target="24" suffix="/7" label="Soporte" />
                </div>
                <ContactFormWidget mailer={props.mailer.clone()} on_notice={on_notice} />
            </ThemeSection>

            <ServiceModal handle={modal.clone()} snapshot={modal.snapshot()} />
            <NoticeToast notice={(*notice).clone()} on_dismiss={dismiss_notice} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .reveal {
        transition: opacity 0.8s ease-out, transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
    }
    .reveal.hidden-below { opacity: 0; transform: translateY(50px); }
    .reveal.hidden-above { opacity: 0; transform: translateY(-50px); }
    .reveal.shown { opacity: 1; transform: none; }
    .reveal.from-left.hidden-below, .reveal.from-left.hidden-above { transform: translateX(-100px); }
    .reveal.from-right.hidden-below, .reveal.from-right.hidden-above { transform: translateX(100px); }
    .reveal.flip.hidden-below { transform: rotateY(90deg) scale(0.8); }
    .reveal.project-card.hidden-below { filter: grayscale(100%); transform: translateY(100px) scale(0.95); }

    .servicio-feature .icon { transition: transform 1s cubic-bezier(0.34, 1.56, 0.64, 1) 1s; }
    .servicio-feature.shown .icon { transform: rotate(360deg); }

    .smart-navbar { position: fixed; top: 0; width: 100%; transition: transform 0.3s ease; z-index: 50; }
    .smart-navbar.nav-hidden { transform: translateY(-100%); }

    .scroll-progress {
        position: fixed; top: 0; left: 0; width: 100%; height: 3px;
        transform-origin: left; background: #2E86FB; z-index: 60;
    }

    .stars-wrapper {
        position: fixed; top: 0; left: 0; width: 100%; height: 100%;
        pointer-events: none; z-index: 0; overflow: hidden;
    }
    .stars-container { position: absolute; top: 0; left: 0; width: 100%; }

    .click-ripple { position: fixed; pointer-events: none; animation: ripple 0.6s ease-out forwards; }
    @keyframes ripple {
        from { transform: translate(-50%, -50%) scale(0); opacity: 0.6; }
        to { transform: translate(-50%, -50%) scale(4); opacity: 0; }
    }

    .cursor-dot, .cursor-outline { position: fixed; pointer-events: none; transform: translate(-50%, -50%); z-index: 100; }
    .cursor-outline { transition: left 0.5s ease-out, top 0.5s ease-out; }

    .preloader { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; z-index: 200; transition: opacity 0.6s ease, visibility 0.6s; }
    .preloader.loaded { opacity: 0; visibility: hidden; }
    .hero-anim { opacity: 0; transform: translateY(50px); transition: opacity 1.2s ease-out 0.5s, transform 1.2s ease-out 0.5s; }
    .hero-anim.in { opacity: 1; transform: none; }
    .hero-scroll-indicator { transition: opacity 1s ease; }

    .modal { display: none; position: fixed; inset: 0; z-index: 150; }
    .modal.active { display: flex; align-items: center; justify-content: center; }
    .single-slide-container .slide-number { animation: slide-number 0.5s ease-out forwards; }
    .single-slide-container .slide-main-title { animation: slide-heading 0.4s ease-out 0.1s both; }
    .single-slide-container .slide-title { animation: slide-copy 0.5s ease-out 0.1s both; }
    .single-slide-container .slide-desc { animation: slide-copy 0.5s ease-out 0.2s both; }
    @keyframes slide-number { from { opacity: 0; transform: scale(0.8); } to { opacity: 0.05; transform: scale(1); } }
    @keyframes slide-heading { from { opacity: 0; transform: translateY(-20px); } to { opacity: 0.6; transform: none; } }
    @keyframes slide-copy { from { opacity: 0; transform: translateY(30px); } to { opacity: 1; transform: none; } }
    .indicator-dot { cursor: pointer; }
    @media (max-width: 768px) {
        .modal-content { overflow: auto; }
    }

    .form-group.error input, .form-group.error textarea { border-color: #ff4d4f; }
    .form-group.success input, .form-group.success textarea { border-color: #2ecc71; }
    .form-message.error { color: #ff4d4f; }
    .form-message.success { color: #2ecc71; }

    .notice-toast {
        position: fixed; bottom: 2rem; left: 50%; transform: translateX(-50%);
        padding: 1rem 1.5rem; border-radius: 12px; cursor: pointer; z-index: 300;
    }
    .notice-success { background: rgba(46, 204, 113, 0.9); }
    .notice-error { background: rgba(255, 77, 79, 0.9); }
"#;
