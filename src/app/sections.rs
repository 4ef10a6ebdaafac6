use chrono::Datelike;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_prefers_reduced_motion;

use crate::content::ContentPayload;

const SUBTITLE: &str = "Softwareentwickler & Technik-Enthusiast";

const TECHNOLOGIES: [&str; 7] = [
    "JavaScript",
    "React",
    "CSS",
    "WordPress",
    "Docker",
    "Kubernetes",
    "HTML/CSS",
];

struct Hobby {
    name: &'static str,
    icon: icondata::Icon,
    color: &'static str,
}

fn hobbies() -> [Hobby; 5] {
    [
        Hobby {
            name: "3D-Druck",
            icon: icondata::LuPrinter,
            color: "#ff6b6b",
        },
        Hobby {
            name: "Gartenarbeit",
            icon: icondata::LuSprout,
            color: "#51cf66",
        },
        Hobby {
            name: "DIY-Projekte",
            icon: icondata::LuHammer,
            color: "#ffa94d",
        },
        Hobby {
            name: "Technik-Basteleien",
            icon: icondata::LuWrench,
            color: "#339af0",
        },
        Hobby {
            name: "Dinge live-Testen",
            icon: icondata::LuRocket,
            color: "#cc5de8",
        },
    ]
}

fn tech_icon(tech: &str) -> icondata::Icon {
    match tech {
        "JavaScript" => icondata::LuZap,
        "React" => icondata::LuAtom,
        "CSS" => icondata::LuPalette,
        "WordPress" => icondata::LuPencil,
        "Docker" => icondata::LuContainer,
        "Kubernetes" => icondata::LuShip,
        "HTML/CSS" => icondata::LuGlobe,
        _ => icondata::LuCode,
    }
}

/// Footer navigation, each entry points at a section id on this page.
const NAV_ANCHORS: [(&str, &str); 4] = [
    ("#about", "Über Mich"),
    ("#tech", "Technologien"),
    ("#hobbies", "Hobbies"),
    ("#contact", "Kontakt"),
];

#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] lead: Option<String>,
) -> impl IntoView {
    view! {
        <div class="section-header mb-8 flex flex-col items-center gap-2 text-center">
            <h2 class="text-4xl font-extrabold">{title}</h2>
            <div class="section-divider" />
            {lead.map(|lead| view! { <p>{lead}</p> })}
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let is_reduced_motion_preferred = use_prefers_reduced_motion();

    let background_class = move || {
        if is_reduced_motion_preferred.get() {
            "hero-background"
        } else {
            "hero-background animated"
        }
    };

    view! {
        <section class="hero-section relative flex min-h-screen flex-col items-center justify-center overflow-hidden">
            <div class=background_class>
                <div class="hero-overlay" />
            </div>
            <div class="hero-content relative flex flex-col items-center gap-4 text-center">
                <h1 class="hero-title text-6xl font-black">"David Hoffert"</h1>
                <p class="hero-subtitle text-xl italic">{SUBTITLE}</p>
                <div class="hero-cta flex flex-row gap-4">
                    <a class="cta-button primary" href="#tech">
                        "Projekte entdecken"
                    </a>
                    <a class="cta-button secondary" href="#contact">
                        "Kontakt aufnehmen"
                    </a>
                </div>
            </div>
            <a class="scroll-indicator absolute bottom-8" href="#about" aria-label="Weiter">
                <Icon icon=icondata::LuChevronDown />
            </a>
        </section>
    }
}

#[component]
pub fn AboutSection(content: ContentPayload) -> impl IntoView {
    view! {
        <section id="about" class="about-section px-8 py-16">
            <SectionHeader title="Über Mich" />
            <div class="about-content mx-auto flex max-w-5xl flex-col items-center gap-8 md:flex-row">
                <div class="about-text">
                    <h3 class="about-title text-2xl font-bold">{content.title}</h3>
                    <p>{content.description}</p>
                </div>
                <div class="about-image" aria-hidden="true">
                    <Icon icon=icondata::LuLaptop />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn TechSection() -> impl IntoView {
    view! {
        <section id="tech" class="technologies-section px-8 py-16">
            <SectionHeader title="Technologien" />
            <div class="tech-grid mx-auto grid max-w-5xl grid-cols-2 gap-4 md:grid-cols-4">
                {TECHNOLOGIES
                    .into_iter()
                    .map(|tech| {
                        view! {
                            <div class="tech-card flex flex-col items-center gap-2">
                                <div class="tech-icon text-3xl">
                                    <Icon icon=tech_icon(tech) />
                                </div>
                                <h3>{tech}</h3>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn HobbiesSection() -> impl IntoView {
    view! {
        <section id="hobbies" class="hobbies-section px-8 py-16">
            <SectionHeader
                title="Privat"
                lead="Wenn ich nicht gerade Code schreibe, beschäftige ich mich mit:"
            />
            <div class="hobbies-grid mx-auto grid max-w-5xl grid-cols-2 gap-4 md:grid-cols-5">
                {hobbies()
                    .into_iter()
                    .map(|hobby| {
                        view! {
                            <div
                                class="hobby-card flex flex-col items-center gap-2"
                                style=format!("--hobby-color: {}", hobby.color)
                            >
                                <div class="hobby-icon text-3xl">
                                    <Icon icon=hobby.icon />
                                </div>
                                <h3>{hobby.name}</h3>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="enhanced-footer px-8 py-12">
            <div class="footer-content mx-auto grid max-w-5xl gap-8 md:grid-cols-3">
                <div class="footer-section">
                    <h3 class="text-xl font-bold">"David Hoffert"</h3>
                    <p>{SUBTITLE}</p>
                </div>
                <div class="footer-section">
                    <h4 class="font-bold">"Navigation"</h4>
                    <nav class="footer-nav flex flex-col">
                        {NAV_ANCHORS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <a class="hover:underline" href=href>
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
                <div class="footer-section">
                    <h4 class="font-bold">"Follow Me"</h4>
                    <div class="social-links flex flex-row gap-4">
                        <a href="#" class="social-link" aria-label="Facebook">
                            <Icon icon=icondata::LuFacebook />
                        </a>
                        <a href="#" class="social-link" aria-label="Twitter">
                            <Icon icon=icondata::LuTwitter />
                        </a>
                        <a href="#" class="social-link" aria-label="LinkedIn">
                            <Icon icon=icondata::LuLinkedin />
                        </a>
                        <a href="#" class="social-link" aria-label="GitHub">
                            <Icon icon=icondata::LuGithub />
                        </a>
                    </div>
                </div>
            </div>
            <div class="footer-bottom mt-8 text-center text-sm">
                <p>{format!("© {year} David Hoffert | Alle Rechte vorbehalten")}</p>
                <p>"Daten bereitgestellt von Strapi CMS"</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_links_target_section_ids() {
        let targets: Vec<_> = NAV_ANCHORS.iter().map(|(href, _)| *href).collect();
        assert_eq!(targets, ["#about", "#tech", "#hobbies", "#contact"]);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn about_section_renders_title_and_description() {
        let content = ContentPayload {
            title: "Live-Titel".to_string(),
            description: "Beschreibung aus dem CMS".to_string(),
        };

        let html = Owner::new().with(|| view! { <AboutSection content /> }.to_html());

        assert!(html.contains("id=\"about\""));
        assert!(html.contains("Live-Titel"));
        assert!(html.contains("Beschreibung aus dem CMS"));
    }
}
