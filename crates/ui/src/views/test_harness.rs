use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use cite_core::model::CitationFormat;
use cite_core::{CslCatalog, CslStyle};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{CatalogSearch, CiteFormatService, CslStyleSearch};
use storage::repository::{SettingsRepository, Storage};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{
    CiteFormatSettings, CiteFormatsController, CiteFormatsPanel, CiteFormatsView, FormatIntent,
    use_cite_formats, use_format_dispatcher,
};

#[derive(Clone)]
pub struct TestApp {
    cite_formats: Arc<CiteFormatService>,
    csl_catalog: CslCatalog,
    csl_search: Arc<dyn CslStyleSearch>,
}

impl UiApp for TestApp {
    fn cite_formats(&self) -> Arc<CiteFormatService> {
        Arc::clone(&self.cite_formats)
    }

    fn csl_catalog(&self) -> CslCatalog {
        self.csl_catalog.clone()
    }

    fn csl_search(&self) -> Arc<dyn CslStyleSearch> {
        Arc::clone(&self.csl_search)
    }
}

pub fn test_catalog() -> CslCatalog {
    CslCatalog::new(vec![
        CslStyle::new("apa-style-id", "APA 7th"),
        CslStyle::new("ieee", "IEEE"),
    ])
}

fn build_test_app(settings: Arc<dyn SettingsRepository>) -> Arc<TestApp> {
    let catalog = test_catalog();
    Arc::new(TestApp {
        cite_formats: Arc::new(CiteFormatService::new(settings)),
        csl_search: Arc::new(CatalogSearch::new(catalog.clone())),
        csl_catalog: catalog,
    })
}

/// Shared slots the harness components fill so tests can drive them.
#[derive(Clone, Default)]
pub struct ControllerHandles {
    controller: Rc<RefCell<Option<CiteFormatsController>>>,
}

impl ControllerHandles {
    pub fn controller(&self) -> CiteFormatsController {
        self.controller
            .borrow()
            .as_ref()
            .copied()
            .expect("controller registered")
    }
}

impl PartialEq for ControllerHandles {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

#[derive(Clone, Default)]
pub struct EditorHandles {
    dispatch: Rc<RefCell<Option<Callback<FormatIntent>>>>,
    updates: Rc<RefCell<Vec<(usize, CitationFormat)>>>,
    removals: Rc<RefCell<Vec<usize>>>,
}

impl EditorHandles {
    pub fn dispatch(&self) -> Callback<FormatIntent> {
        self.dispatch
            .borrow()
            .as_ref()
            .copied()
            .expect("dispatch registered")
    }

    pub fn updates(&self) -> Vec<(usize, CitationFormat)> {
        self.updates.borrow().clone()
    }

    pub fn removals(&self) -> Vec<usize> {
        self.removals.borrow().clone()
    }
}

impl PartialEq for EditorHandles {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dispatch, &other.dispatch)
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Formats,
    Editor(CitationFormat),
    Controller(ControllerHandles),
    EditorIntents {
        format: CitationFormat,
        index: usize,
        handles: EditorHandles,
    },
}

#[component]
fn ControllerHarness(handles: ControllerHandles) -> Element {
    let service = use_context::<AppContext>().cite_formats();
    let controller = use_cite_formats(service);
    *handles.controller.borrow_mut() = Some(controller);
    rsx! {
        CiteFormatsPanel { controller }
    }
}

#[component]
fn EditorIntentHarness(format: CitationFormat, index: usize, handles: EditorHandles) -> Element {
    let updates = Rc::clone(&handles.updates);
    let removals = Rc::clone(&handles.removals);
    let update_format = use_callback(move |change: (usize, CitationFormat)| {
        updates.borrow_mut().push(change);
    });
    let remove_format = use_callback(move |index: usize| {
        removals.borrow_mut().push(index);
    });
    let dispatch = use_format_dispatcher(&format, index, update_format, remove_format);
    *handles.dispatch.borrow_mut() = Some(dispatch);
    rsx! {
        CiteFormatSettings { format, index, update_format, remove_format }
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Formats => rsx! { CiteFormatsView {} },
        ViewKind::Editor(format) => rsx! {
            CiteFormatSettings {
                format,
                index: 0,
                update_format: move |_: (usize, CitationFormat)| {},
                remove_format: move |_: usize| {},
            }
        },
        ViewKind::Controller(handles) => rsx! { ControllerHarness { handles } },
        ViewKind::EditorIntents {
            format,
            index,
            handles,
        } => rsx! { EditorIntentHarness { format, index, handles } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let spawned saves and effects run to completion.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    /// Run `f` with the dom's runtime current, as event handlers do.
    pub fn in_runtime<O>(&self, f: impl FnOnce() -> O) -> O {
        self.dom.in_runtime(f)
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, storage: Storage) -> ViewHarness {
    let app = build_test_app(Arc::clone(&storage.settings));
    let dom = VirtualDom::new_with_props(ViewRoot, ViewHarnessProps { app, view });
    ViewHarness { dom, storage }
}

/// Render a single format editor and return its HTML.
pub fn render_editor(format: CitationFormat) -> String {
    let mut harness = setup_view_harness(ViewKind::Editor(format), Storage::in_memory());
    harness.rebuild();
    harness.render()
}
