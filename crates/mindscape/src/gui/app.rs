use crate::config::Config;
use crate::gui::metrics::CairoMetrics;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::view;
use compass::{
    CompassRenderer, InputController, Lexicon, Point, RenderOutcome, Scene, Size, Submission,
    SubmitTrigger,
};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

type Compass = InputController<'static, Scene>;

pub struct AppInit {
    pub config: Config,
    pub lexicon: &'static Lexicon,
    /// Submitted as soon as the window is up.
    pub challenge: Option<String>,
}

pub struct AppModel {
    pub compass: Rc<RefCell<Compass>>,
    pub rendered_at: Rc<Cell<Instant>>,
    pub width: i32,
    pub height: i32,
    pub entry: gtk::Entry,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Submit(SubmitTrigger),
    Click(Point),
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Mindscape"),
            set_default_size: (model.width, model.height),
            add_css_class: "mindscape-window",

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,
                set_margin_top: 16,
                set_margin_bottom: 16,
                set_margin_start: 16,
                set_margin_end: 16,

                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 8,

                    #[name = "entry"]
                    gtk::Entry {
                        set_hexpand: true,
                        set_placeholder_text: Some("Name a challenge, e.g. stress"),
                        connect_activate => AppMsg::Submit(SubmitTrigger::EnterKey),
                    },

                    gtk::Button {
                        set_label: "Map my compass",
                        connect_clicked => AppMsg::Submit(SubmitTrigger::Button),
                    },
                },

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "mindscape-compass",

                    add_controller = gtk::GestureClick {
                        connect_released[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::Click(Point::new(x, y)));
                        }
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config,
            lexicon,
            challenge,
        } = init;

        theme::load_css(&config.theme);

        let (width, height) = (config.window.width, config.window.height);
        let scene = Scene::new(
            Size::new(width as f64, height as f64),
            CairoMetrics::new(),
        );
        let renderer =
            CompassRenderer::new(lexicon, scene).with_stagger(config.animation.stagger());

        let model = AppModel {
            compass: Rc::new(RefCell::new(InputController::new(renderer))),
            rendered_at: Rc::new(Cell::new(Instant::now())),
            width,
            height,
            entry: gtk::Entry::default(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.entry = widgets.entry.clone();
        model.drawing_area = widgets.drawing_area.clone();

        let colors = ThemeColors::from_config(&config.theme);
        let compass_draw = model.compass.clone();
        let rendered_at = model.rendered_at.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, _, _| {
                let compass = compass_draw.borrow();
                let elapsed = rendered_at.get().elapsed();
                if let Err(e) = view::draw(cr, compass.renderer().surface(), &colors, elapsed) {
                    log::error!("Drawing error: {}", e);
                }
            });

        if let Some(challenge) = challenge {
            model.entry.set_text(&challenge);
            sender.input(AppMsg::Submit(SubmitTrigger::Button));
        }

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Submit(trigger) => {
                let text = self.entry.text();
                let size = self.surface_size();

                let reveal_times = {
                    let mut compass = self.compass.borrow_mut();
                    compass.renderer_mut().surface_mut().resize(size);
                    if let Submission::Rendered(RenderOutcome::Rendered { tools }) =
                        compass.submit(&text, trigger)
                    {
                        log::info!("Mapped '{}' to {} tools", text.trim(), tools);
                    }
                    compass.renderer().surface().reveal_times()
                };

                self.rendered_at.set(Instant::now());
                for delay in reveal_times {
                    let area = self.drawing_area.clone();
                    glib::timeout_add_local_once(delay, move || area.queue_draw());
                }
                self.drawing_area.queue_draw();
            }
            AppMsg::Click(point) => {
                let elapsed = self.rendered_at.get().elapsed();
                let mut compass = self.compass.borrow_mut();
                let renderer = compass.renderer_mut();
                if let Some(spoke) = renderer.surface().visible_click_target(point, elapsed)
                    && renderer.select(spoke)
                {
                    self.drawing_area.queue_draw();
                }
            }
        }
    }
}

impl AppModel {
    /// Allocated size of the drawing area, or the configured window size
    /// before the first allocation.
    fn surface_size(&self) -> Size {
        let (w, h) = (self.drawing_area.width(), self.drawing_area.height());
        if w > 0 && h > 0 {
            Size::new(w as f64, h as f64)
        } else {
            Size::new(self.width as f64, self.height as f64)
        }
    }
}
