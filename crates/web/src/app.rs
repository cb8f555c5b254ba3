//! The page: a fixed DOM skeleton whose sections follow the session state.

use std::{cell::RefCell, mem::take, rc::Rc};

use availablefonts_core::{
    BrowseState, Clipboard, Event, Screen, Session,
    config::{DESCRIPTION, TITLE},
    resolve_fetch,
    view::{ERROR_HEADING, FETCH_LABEL, FontItem, LOADING_LABEL},
};
use log::error;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::platform::{BrowserClipboard, BrowserFonts, BrowserPermissions};

const AUTHOR_URL: &str = "https://github.com/waki285";
const SOURCE_URL: &str = "https://github.com/waki285/availablefonts";

/// Attribute carrying a list item's index into the working copy.
const INDEX_ATTRIBUTE: &str = "data-index";

type JsResult<T> = Result<T, JsValue>;

/// Elements that change between renders.
struct Elements {
    fetch: HtmlElement,
    loading: HtmlElement,
    success: HtmlElement,
    count: HtmlElement,
    list: HtmlElement,
    failure: HtmlElement,
    message: HtmlElement,
}

pub struct App {
    document: Document,
    session: RefCell<Session>,
    elements: Elements,
}

fn element(document: &Document, tag: &str, class: &str) -> JsResult<HtmlElement> {
    let element = document.create_element(tag)?.dyn_into::<HtmlElement>()?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

fn text(document: &Document, tag: &str, class: &str, content: &str) -> JsResult<HtmlElement> {
    let element = element(document, tag, class)?;
    element.set_text_content(Some(content));
    Ok(element)
}

fn link(document: &Document, prefix: &str, label: &str, href: &str) -> JsResult<HtmlElement> {
    let paragraph = text(document, "p", "", prefix)?;
    let anchor = text(document, "a", "link", label)?;
    anchor.set_attribute("href", href)?;
    anchor.set_attribute("rel", "noopener noreferrer")?;
    paragraph.append_child(&anchor)?;
    Ok(paragraph)
}

/// A text input with a submit button; `on_submit` receives the input value.
fn form(
    document: &Document,
    value: &str,
    placeholder: &str,
    button: &str,
    on_submit: impl Fn(String) + 'static,
) -> JsResult<HtmlElement> {
    let form = element(document, "form", "form-row")?;
    let input = document.create_element("input")?.dyn_into::<HtmlInputElement>()?;
    input.set_type("text");
    input.set_value(value);
    input.set_placeholder(placeholder);
    let submit = text(document, "button", "button button-round", button)?;
    submit.set_attribute("type", "submit")?;
    form.append_child(&input)?;
    form.append_child(&submit)?;

    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        event.prevent_default();
        on_submit(input.value());
    });
    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(form)
}

/// Parse the `data-index` attribute of a clicked copy button.
fn parse_index(value: Option<String>) -> Option<usize> {
    value?.parse().ok()
}

impl App {
    /// Build the page inside `root` and show the idle screen.
    pub fn mount(document: Document, root: &Element) -> JsResult<Rc<Self>> {
        let main = element(&document, "main", "page")?;
        let title = text(&document, "h1", "title", TITLE)?;
        main.append_child(&title)?;
        let description = text(&document, "p", "description", DESCRIPTION)?;
        main.append_child(&description)?;

        let fetch = text(&document, "button", "button", FETCH_LABEL)?;
        fetch.set_attribute("type", "button")?;
        let loading = text(&document, "p", "", LOADING_LABEL)?;
        let success = element(&document, "section", "fonts")?;
        let count = element(&document, "p", "")?;
        let list = element(&document, "ul", "font-list")?;
        let failure = element(&document, "section", "error")?;
        let heading = text(&document, "h2", "error-heading", ERROR_HEADING)?;
        failure.append_child(&heading)?;
        let message = element(&document, "p", "")?;
        failure.append_child(&message)?;

        for section in [&fetch, &loading, &success, &failure] {
            main.append_child(section)?;
        }
        let author = link(&document, "Made with ❤️ by ", "@waki285", AUTHOR_URL)?;
        let source = link(&document, "Source code is available on ", "GitHub", SOURCE_URL)?;
        main.append_child(&author)?;
        main.append_child(&source)?;
        root.append_child(&main)?;

        let app = Rc::new(Self {
            document,
            session: RefCell::new(Session::new()),
            elements: Elements { fetch, loading, success, count, list, failure, message },
        });
        app.wire()?;
        app.render()?;
        Ok(app)
    }

    /// Attach the event handlers that live as long as the page.
    fn wire(self: &Rc<Self>) -> JsResult<()> {
        let elements = &self.elements;

        let app = Rc::clone(self);
        let on_fetch = Closure::<dyn FnMut()>::new(move || app.fetch());
        elements.fetch.set_onclick(Some(on_fetch.as_ref().unchecked_ref()));
        on_fetch.forget();

        let app = Rc::clone(self);
        let preview = form(
            &self.document,
            self.session.borrow().preview(),
            "",
            "Apply",
            move |text| app.dispatch(Event::PreviewSubmitted(text)),
        )?;
        let app = Rc::clone(self);
        let search = form(&self.document, "", "Search fonts", "Search", move |text| {
            app.dispatch(Event::FilterSubmitted(text))
        })?;
        elements.success.append_child(&elements.count)?;
        elements.success.append_child(&preview)?;
        elements.success.append_child(&search)?;
        elements.success.append_child(&elements.list)?;

        // One listener for every copy button in the list.
        let app = Rc::clone(self);
        let on_copy = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let index = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest(&format!("[{INDEX_ATTRIBUTE}]")).ok().flatten())
                .and_then(|button| parse_index(button.get_attribute(INDEX_ATTRIBUTE)));
            if let Some(index) = index {
                app.copy(index);
            }
        });
        elements.list.add_event_listener_with_callback("click", on_copy.as_ref().unchecked_ref())?;
        on_copy.forget();

        Ok(())
    }

    /// Start a fetch. Only has an effect from the idle screen.
    fn fetch(self: &Rc<Self>) {
        self.dispatch(Event::FetchRequested);
        if *self.session.borrow().state() != BrowseState::Loading {
            return;
        }
        let app = Rc::clone(self);
        spawn_local(async move {
            let event = resolve_fetch(&BrowserFonts, &BrowserPermissions).await;
            app.dispatch(event);
        });
    }

    fn copy(&self, index: usize) {
        let session = self.session.borrow();
        if let Some(font) = session.state().catalog().and_then(|c| c.shown().get(index)) {
            BrowserClipboard.write_text(&font.family);
        }
    }

    fn dispatch(&self, event: Event) {
        {
            let mut session = self.session.borrow_mut();
            *session = take(&mut *session).apply(event);
        }
        if let Err(e) = self.render() {
            error!("Render failed: {e:?}");
        }
    }

    fn render(&self) -> JsResult<()> {
        let session = self.session.borrow();
        let screen = Screen::of(&session);
        let elements = &self.elements;

        elements.fetch.set_hidden(!matches!(screen, Screen::Idle));
        elements.loading.set_hidden(!matches!(screen, Screen::Loading));
        elements.success.set_hidden(!matches!(screen, Screen::Success { .. }));
        elements.failure.set_hidden(!matches!(screen, Screen::Error { .. }));

        match screen {
            Screen::Success { label, items } => {
                elements.count.set_text_content(Some(&label));
                elements.list.set_text_content(None);
                for (index, item) in items.iter().enumerate() {
                    let font_item = self.font_item(index, item)?;
                    elements.list.append_child(&font_item)?;
                }
            }
            Screen::Error { message } => elements.message.set_text_content(Some(&message)),
            Screen::Idle | Screen::Loading => {}
        }
        Ok(())
    }

    fn font_item(&self, index: usize, item: &FontItem) -> JsResult<HtmlElement> {
        let document = &self.document;
        let li = element(document, "li", "font")?;

        let meta = element(document, "div", "font-meta")?;
        let family = text(document, "p", "font-family", &item.font.family)?;
        meta.append_child(&family)?;
        let style = text(document, "p", "font-style", &item.font.style)?;
        meta.append_child(&style)?;
        let copy = text(document, "button", "button button-round", "Copy family")?;
        copy.set_attribute("type", "button")?;
        copy.set_attribute(INDEX_ATTRIBUTE, &index.to_string())?;
        meta.append_child(&copy)?;

        let class = format!("font-preview {}", item.style_class);
        let preview = text(document, "div", &class, item.preview)?;
        preview.set_attribute("style", &format!("font-family: {}", item.font_family))?;

        li.append_child(&meta)?;
        li.append_child(&preview)?;
        Ok(li)
    }
}
