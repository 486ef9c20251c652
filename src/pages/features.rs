use yew::prelude::*;
use yew_hooks::use_mount;
use log::info;

use crate::components::hover_card::HoverCard;
use crate::components::tilt::TiltContainer;
use crate::config;

/// Static content for one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub video: &'static str,
    /// `*` toggles emphasis, see `components::title`.
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub link: &'static str,
    pub coming_soon: bool,
    /// Layout classes for the tilt wrapper.
    pub class: &'static str,
}

pub const HEADLINE: Feature = Feature {
    video: "videos/feature-1.mp4",
    title: "*R*e*a*lit*y*",
    description: Some("Explore how Detroit: Become Human’s predictions about AI’s role in daily life have turned into reality, from smart assistants to automated systems shaping our world"),
    link: "https://www.dmcgroup.eu/en/blog/trends/the-rise-of-smart-assistants/",
    coming_soon: true,
    class: "border-hsla bento-headline",
};

pub const GRID: [Feature; 5] = [
    Feature {
        video: "videos/feature-2.mp4",
        title: "*C*r*e*ati*v*it*y*",
        description: Some("Learn how Detroit envisioned AI-driven creativity, from music to art, and how tools like DALL·E and ChatGPT are redefining creative industries"),
        link: "https://openai.com/research/dall-e/",
        coming_soon: true,
        class: "bento-tilt_1 bento-tall",
    },
    Feature {
        video: "videos/feature-3.mp4",
        title: "*E*thi*c*s",
        description: Some("Delve into the ethical dilemmas raised by Detroit: Become Human and the ongoing debates about AI rights, biases, and moral responsibilities in today’s world"),
        link: "https://www.captechu.edu/blog/ethical-considerations-of-artificial-intelligence",
        coming_soon: true,
        class: "bento-tilt_1 bento-inset-start",
    },
    Feature {
        video: "videos/feature-4.mp4",
        title: "Dis*P*l*a*ceme*n*t",
        description: Some("Uncover the parallels between the game’s portrayal of androids replacing jobs and the real-world impact of AI-driven automation on industries and workers"),
        link: "https://www.nature.com/articles/s41599-024-02647-9",
        coming_soon: true,
        class: "bento-tilt_1 bento-inset-end",
    },
    Feature {
        video: "videos/feature-6.mp4",
        title: "*E*m*o*tio*n*",
        description: Some("Discover how Detroit explored emotional intelligence in AI, and how modern systems are creating deeper human connections through empathy-driven technology"),
        link: "https://www.bbc.com/news/technology-61784011",
        coming_soon: true,
        class: "bento-tilt_2",
    },
    Feature {
        video: "videos/feature-5.mp4",
        title: "*P**o*li*c*in*g*",
        description: Some("See how the game’s portrayal of AI in law enforcement mirrors today’s use of predictive policing, surveillance technologies, and their ethical implications"),
        link: "https://www.chathamhouse.org/2019/08/promise-and-perils-facial-recognition-technology",
        coming_soon: true,
        class: "bento-tilt_2",
    },
];

fn card(feature: &Feature) -> Html {
    html! {
        <TiltContainer class={classes!("bento-tilt", feature.class)}>
            <HoverCard
                src={config::asset_url(feature.video)}
                title={feature.title}
                description={feature.description.map(AttrValue::from)}
                is_coming_soon={feature.coming_soon}
                link={feature.link}
            />
        </TiltContainer>
    }
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    use_mount(|| {
        info!("Features section mounted with {} cards", GRID.len() + 1);
    });

    html! {
        <section class="features">
            <div class="features__container">
                <div class="features__intro">
                    <p class="features__heading">
                        {"Detroit’s Vision: Expectations vs. Reality"}
                    </p>
                    <p class="features__lede">
                        {"Just seven years ago, Detroit: Become Human envisioned a future where AI would challenge society's norms, ethics, and relationships. In less than a decade, many of its predictions have become reality. From AI's integration into our daily lives to debates over autonomy and morality, explore how fiction has transformed into our present"}
                    </p>
                </div>

                { card(&HEADLINE) }

                <div class="bento-grid">
                    { for GRID.iter().map(card) }
                </div>
            </div>
            <style>
                {r#"
                .features {
                    background: #000;
                    padding-bottom: 13rem;
                }

                .features__container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 0.75rem;
                }

                .features__intro {
                    padding: 8rem 1.25rem;
                }

                .features__heading,
                .features__lede {
                    font-size: 1.125rem;
                    color: #eff6ff;
                }

                .features__lede {
                    max-width: 28rem;
                    opacity: 0.5;
                }

                .border-hsla {
                    border: 1px solid hsla(0, 0%, 100%, 0.2);
                }

                .bento-tilt {
                    position: relative;
                    overflow: hidden;
                    border-radius: 0.375rem;
                    transition: transform 0.3s ease-out;
                }

                .bento-headline {
                    margin-bottom: 1.75rem;
                    height: 24rem;
                    width: 100%;
                }

                .bento-grid {
                    display: grid;
                    height: 135vh;
                    width: 100%;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    grid-template-rows: repeat(3, minmax(0, 1fr));
                    gap: 1.75rem;
                }

                .bento-tilt_1 {
                    grid-row: span 1 / span 1;
                }

                .bento-inset-start {
                    margin-inline-start: 8rem;
                }

                .bento-inset-end {
                    margin-inline-end: 3.5rem;
                }

                .bento-tilt_2 {
                    position: relative;
                    grid-column: span 1 / span 1;
                    grid-row: span 1 / span 1;
                }

                .bento-card {
                    position: relative;
                    width: 100%;
                    height: 100%;
                }

                .bento-card__video {
                    position: absolute;
                    left: 0;
                    top: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: center;
                }

                .bento-card__body {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    width: 100%;
                    height: 100%;
                    flex-direction: column;
                    justify-content: space-between;
                    padding: 1.25rem;
                    color: #eff6ff;
                    box-sizing: border-box;
                }

                .bento-title {
                    text-transform: uppercase;
                    font-size: 2.5rem;
                    font-weight: 900;
                    margin: 0;
                }

                .bento-card__description {
                    margin-top: 0.75rem;
                    max-width: 16rem;
                    font-size: 0.75rem;
                }

                .discover-link {
                    position: relative;
                    display: flex;
                    width: fit-content;
                    align-items: center;
                    gap: 0.25rem;
                    overflow: hidden;
                    border-radius: 9999px;
                    background: #faff70;
                    padding: 0.5rem 1.25rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    color: #000;
                    text-decoration: none;
                    cursor: pointer;
                    transition: box-shadow 0.3s;
                }

                .discover-link:hover {
                    box-shadow: 0 0 15px #faff70;
                }

                .discover-link__glow {
                    pointer-events: none;
                    position: absolute;
                    inset: -1px;
                    opacity: 0;
                    transition: opacity 0.3s;
                }

                .discover-link__icon,
                .discover-link__label {
                    position: relative;
                    z-index: 20;
                    margin: 0;
                }

                @media (min-width: 768px) {
                    .features__container {
                        padding: 0 2.5rem;
                    }

                    .bento-headline {
                        height: 65vh;
                    }

                    .bento-tall {
                        grid-row: span 2 / span 2;
                    }

                    .bento-inset-start {
                        margin-inline-start: 0;
                    }

                    .bento-inset-end {
                        margin-inline-end: 0;
                    }

                    .bento-card__description {
                        font-size: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
