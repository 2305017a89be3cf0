use yew::prelude::*;

use crate::analytics::Analytics;
use crate::carousel::{BrowserScheduler, Carousel};
use crate::config::CarouselConfig;
use crate::content::{Feature, Screenshot, Testimonial, FEATURES, SCREENSHOTS, TESTIMONIALS};
use crate::theme::{self, Theme};

/// Page-wide data owned by the app root and handed down through context.
///
/// Each carousel has its own controller. They are `None` only if their
/// content list was empty, in which case the section renders nothing.
#[derive(Clone, PartialEq)]
pub struct AppData {
    pub features: &'static [Feature],
    pub screenshots: &'static [Screenshot],
    pub testimonials: &'static [Testimonial],
    pub screenshot_carousel: Option<Carousel<Screenshot>>,
    pub testimonial_carousel: Option<Carousel<Testimonial>>,
    pub active_feature: UseStateHandle<Option<usize>>,
    pub theme: UseStateHandle<Theme>,
    pub analytics: Analytics,
}

impl AppData {
    pub fn activate_feature(&self, index: usize) {
        if *self.active_feature != Some(index) {
            self.active_feature.set(Some(index));
        }
    }

    /// Only an explicit toggle is persisted; the default is never stored.
    pub fn toggle_theme(&self) {
        let next = self.theme.toggled();
        theme::persist(next);
        self.theme.set(next);
    }
}

#[derive(Properties, PartialEq)]
pub struct AppDataProviderProps {
    pub analytics: Analytics,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn AppDataProvider(props: &AppDataProviderProps) -> Html {
    let active_feature = use_state(|| None::<usize>);
    let theme = use_state(theme::load);
    let screenshot_carousel =
        use_state(|| build_carousel("screenshots", SCREENSHOTS, CarouselConfig::default()));
    let testimonial_carousel = use_state(|| {
        build_carousel("testimonials", TESTIMONIALS, CarouselConfig::testimonials())
    });

    {
        let carousels = (
            (*screenshot_carousel).clone(),
            (*testimonial_carousel).clone(),
        );
        use_effect_with_deps(
            move |(screenshots, testimonials): &(
                Option<Carousel<Screenshot>>,
                Option<Carousel<Testimonial>>,
            )| {
                let screenshots = screenshots.clone();
                let testimonials = testimonials.clone();
                if let Some(carousel) = &screenshots {
                    carousel.mount();
                }
                if let Some(carousel) = &testimonials {
                    carousel.mount();
                }
                move || {
                    if let Some(carousel) = screenshots {
                        carousel.unmount();
                    }
                    if let Some(carousel) = testimonials {
                        carousel.unmount();
                    }
                }
            },
            carousels,
        );
    }
    {
        use_effect_with_deps(
            move |theme: &Theme| {
                theme::apply(*theme);
                || ()
            },
            *theme,
        );
    }

    let data = AppData {
        features: FEATURES,
        screenshots: SCREENSHOTS,
        testimonials: TESTIMONIALS,
        screenshot_carousel: (*screenshot_carousel).clone(),
        testimonial_carousel: (*testimonial_carousel).clone(),
        active_feature,
        theme,
        analytics: props.analytics.clone(),
    };

    html! {
        <ContextProvider<AppData> context={data}>
            { for props.children.iter() }
        </ContextProvider<AppData>>
    }
}

fn build_carousel<T: Clone + 'static>(
    name: &str,
    items: &[T],
    config: CarouselConfig,
) -> Option<Carousel<T>> {
    match Carousel::new(items.to_vec(), &config, BrowserScheduler) {
        Ok(carousel) => Some(carousel),
        Err(err) => {
            log::error!("{} carousel disabled: {}", name, err);
            None
        }
    }
}

/// Access the page data. Components using this must sit under
/// [`AppDataProvider`].
#[hook]
pub fn use_app_data() -> AppData {
    use_context::<AppData>().expect("use_app_data called outside AppDataProvider")
}
