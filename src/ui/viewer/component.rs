// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns the session: the catalog and its one-shot loader, the
//! slide cursor, the swipe tracker and the decoded pictures. Every change to
//! the cursor goes through [`State::handle_message`], so input from keys,
//! swipes and buttons all follows the same clamped transitions.

use crate::catalog::{self, Catalog, CatalogEntry, Loader, Location, Ticket};
use crate::config::Config;
use crate::error::{CatalogError, Error};
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageCache, ImageData, ImageState};
use crate::navigation::gesture::intent_for_key;
use crate::navigation::{
    FabricPosition, GestureConfig, GestureTracker, Intent, PointerSource, Sequencer, Slide,
};
use crate::ui::viewer::{error_state, slide, splash};
use iced::{event, keyboard, mouse, touch, window, Element, Point, Task};

/// Messages emitted by viewer-related widgets and async loads.
#[derive(Debug, Clone)]
pub enum Message {
    CatalogLoaded {
        ticket: Ticket,
        result: Result<Vec<CatalogEntry>, CatalogError>,
    },
    ImageLoaded {
        location: Location,
        result: Result<ImageData, Error>,
    },
    /// Previous/next buttons and the splash "Begin" button.
    Navigate(Intent),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Where the catalog and pictures come from, and how slides are presented.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub manifest: Location,
    pub image_base: Location,
    pub splash_image: String,
    pub intro_image: String,
    pub gesture: GestureConfig,
    pub show_quantity: bool,
    pub show_position: bool,
    pub image_cache_entries: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            manifest: config.catalog.manifest_location(),
            image_base: config.catalog.image_base_location(),
            splash_image: config.catalog.splash_image.clone(),
            intro_image: config.catalog.intro_image.clone(),
            gesture: config.gesture.resolve(),
            show_quantity: config.viewer.show_quantity,
            show_position: config.viewer.show_position,
            image_cache_entries: config.viewer.image_cache_capacity(),
        }
    }

    /// Applies `--manifest` / `--image-base` overrides.
    #[must_use]
    pub fn with_overrides(mut self, manifest: Option<&str>, image_base: Option<&str>) -> Self {
        if let Some(raw) = manifest {
            self.manifest = Location::parse(raw);
        }
        if let Some(raw) = image_base {
            self.image_base = Location::parse(raw);
        }
        self
    }
}

/// Environment passed down when rendering.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Complete viewer component state.
pub struct State {
    settings: Settings,
    sequencer: Sequencer,
    catalog: Catalog,
    loader: Loader,
    gestures: GestureTracker,
    cursor_position: Option<Point>,
    images: ImageCache,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("cursor", &self.sequencer.cursor())
            .field("catalog_len", &self.catalog.len())
            .field("torn_down", &self.loader.is_torn_down())
            .field("images", &self.images)
            .finish()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl State {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let images = ImageCache::new(settings.image_cache_entries);
        Self {
            settings,
            sequencer: Sequencer::new(),
            catalog: Catalog::Unloaded,
            loader: Loader::new(),
            gestures: GestureTracker::default(),
            cursor_position: None,
            images,
        }
    }

    /// Starts the catalog fetch and the pictures of the first slides.
    ///
    /// Calling it again after the fetch started only re-requests pictures.
    pub fn start(&mut self) -> Task<Message> {
        let fetch = match self.loader.begin() {
            Some(ticket) => {
                let manifest = self.settings.manifest.clone();
                tracing::info!(%manifest, "loading catalog");
                Task::perform(catalog::load(manifest), move |result| {
                    Message::CatalogLoaded { ticket, result }
                })
            }
            None => Task::none(),
        };
        Task::batch([fetch, self.request_slide_images()])
    }

    /// Disposes the session. Late completions are dropped from here on and
    /// input listeners are detached.
    pub fn teardown(&mut self) {
        self.loader.teardown();
        self.gestures.cancel();
        self.cursor_position = None;
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.loader.is_torn_down()
    }

    /// Whether input should reach the viewer at all. False once the catalog
    /// failed or the viewer was torn down.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        !self.loader.is_torn_down() && self.catalog.error().is_none()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Ticket of the catalog fetch still awaiting its completion.
    #[must_use]
    pub fn pending_catalog(&self) -> Option<Ticket> {
        self.loader.in_flight()
    }

    #[must_use]
    pub fn current_slide(&self) -> Slide<'_> {
        self.sequencer.current_slide(self.catalog.entries())
    }

    #[must_use]
    pub fn fabric_position(&self) -> Option<FabricPosition> {
        self.sequencer.fabric_position()
    }

    /// Load state of the picture belonging to `slide`.
    #[must_use]
    pub fn image_state(&self, slide: Slide<'_>) -> Option<&ImageState> {
        self.images.state(&self.image_location(slide))
    }

    /// Window title for the current slide.
    #[must_use]
    pub fn title(&self, i18n: &I18n) -> String {
        match self.current_slide() {
            Slide::Fabric(entry) => {
                i18n.tr_with_args("window-title-fabric", &[("name", entry.name.as_str())])
            }
            Slide::Splash | Slide::Intro => i18n.tr("window-title"),
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded { ticket, result } => self.on_catalog_loaded(ticket, result),
            Message::ImageLoaded { location, result } => {
                if self.loader.is_torn_down() {
                    return Task::none();
                }
                self.images.complete(&location, result);
                // The current picture may have been evicted by a prefetch.
                self.request_slide_images()
            }
            Message::Navigate(intent) => self.navigate(intent),
            Message::RawEvent { event, .. } => match self.handle_raw_event(event) {
                Some(intent) => self.navigate(intent),
                None => Task::none(),
            },
        }
    }

    fn on_catalog_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<CatalogEntry>, CatalogError>,
    ) -> Task<Message> {
        if !self.loader.accept(ticket) {
            tracing::debug!(?ticket, "discarding stale catalog completion");
            return Task::none();
        }

        match &result {
            Ok(entries) => tracing::info!(count = entries.len(), "catalog loaded"),
            Err(err) => tracing::error!(
                manifest = %self.settings.manifest,
                error = %err,
                "catalog failed to load"
            ),
        }

        self.catalog = Catalog::from(result);
        self.sequencer.set_catalog_len(self.catalog.len());

        if self.catalog.error().is_some() {
            self.gestures.cancel();
            return Task::none();
        }
        self.request_slide_images()
    }

    fn navigate(&mut self, intent: Intent) -> Task<Message> {
        if !self.accepts_input() {
            return Task::none();
        }
        if self.sequencer.apply(intent) {
            tracing::debug!(cursor = self.sequencer.cursor(), ?intent, "slide changed");
            self.request_slide_images()
        } else {
            Task::none()
        }
    }

    /// Translates a native event into a navigation intent, tracking swipe
    /// starts along the way.
    fn handle_raw_event(&mut self, event: event::Event) -> Option<Intent> {
        if !self.accepts_input() {
            return None;
        }
        let gesture = self.settings.gesture;

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                intent_for_key(&key)
            }
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::CursorMoved { position } => {
                    self.cursor_position = Some(position);
                    None
                }
                mouse::Event::CursorLeft => {
                    self.cursor_position = None;
                    self.gestures.cancel();
                    None
                }
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    if let Some(position) = self.cursor_position {
                        self.gestures.press(PointerSource::Mouse, position);
                    }
                    None
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    let position = self.cursor_position?;
                    self.gestures
                        .release(PointerSource::Mouse, position, &gesture)
                }
                _ => None,
            },
            event::Event::Touch(touch_event) => match touch_event {
                touch::Event::FingerPressed { id, position } => {
                    self.gestures.press(PointerSource::Finger(id.0), position);
                    None
                }
                touch::Event::FingerLifted { id, position } => {
                    self.gestures
                        .release(PointerSource::Finger(id.0), position, &gesture)
                }
                touch::Event::FingerLost { .. } => {
                    self.gestures.cancel();
                    None
                }
                touch::Event::FingerMoved { .. } => None,
            },
            _ => None,
        }
    }

    fn image_location(&self, slide: Slide<'_>) -> Location {
        let base = &self.settings.image_base;
        match slide {
            Slide::Splash => base.join(&self.settings.splash_image),
            Slide::Intro => base.join(&self.settings.intro_image),
            Slide::Fabric(entry) => base.join(&entry.filename),
        }
    }

    /// Requests the current slide's picture and prefetches the next one.
    fn request_slide_images(&mut self) -> Task<Message> {
        if self.loader.is_torn_down() {
            return Task::none();
        }

        let entries = self.catalog.entries();
        let current = self.image_location(self.sequencer.current_slide(entries));
        // A single-entry cache would evict the current picture for the prefetch.
        let upcoming = if self.images.capacity() > 1 {
            self.sequencer
                .upcoming_slide(entries)
                .map(|slide| self.image_location(slide))
        } else {
            None
        };

        let mut tasks = Vec::new();
        for location in std::iter::once(current).chain(upcoming) {
            if self.images.request(&location) {
                tasks.push(load_image_task(location));
            }
        }
        Task::batch(tasks)
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        if let Some(error) = self.catalog.error() {
            return error_state::view(error, env.i18n);
        }

        let current = self.current_slide();
        let picture = self.image_state(current);

        match current {
            Slide::Splash => splash::view(splash::ViewContext {
                i18n: env.i18n,
                background: picture,
            }),
            Slide::Intro => slide::intro(slide::IntroContext {
                i18n: env.i18n,
                picture,
                catalog_pending: self.catalog.is_pending(),
                catalog_empty: self.catalog.is_loaded() && self.catalog.is_empty(),
                has_next: !self.sequencer.is_at_end(),
            }),
            Slide::Fabric(entry) => slide::fabric(slide::FabricContext {
                i18n: env.i18n,
                entry,
                picture,
                position: self.sequencer.fabric_position(),
                show_quantity: self.settings.show_quantity,
                show_position: self.settings.show_position,
                has_next: !self.sequencer.is_at_end(),
            }),
        }
    }
}

fn load_image_task(location: Location) -> Task<Message> {
    Task::perform(media::load_image(location.clone()), move |result| {
        Message::ImageLoaded { location, result }
    })
}
