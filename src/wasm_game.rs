// Crossword – A crossword game
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use wasm_bindgen::prelude::*;
use web_sys::console;
use super::template::{Template, Word};
use super::grid;
use super::direction::{Direction, Arrow};
use super::puzzle::{Puzzle, Notification, Key, Modifiers};
use js_sys::Reflect;
use std::collections::HashMap;

const DEFAULT_TEMPLATE: &'static str = "template.json";
const TEMPLATE_PARAM: &'static str = "t";
const GRID_ID: &'static str = "crossword-grid";
const ACROSS_CLUES_ID: &'static str = "across-clues";
const DOWN_CLUES_ID: &'static str = "down-clues";
const RESET_BUTTON_ID: &'static str = "reset-button";
const PROGRESS_ID: &'static str = "progress";
const MESSAGE_ID: &'static str = "message";
const CONTENT_ID: &'static str = "content";
const CELL_ID_PREFIX: &'static str = "cell-";
const RESET_QUESTION: &'static str =
    "Are you sure you want to clear all of your answers?";

fn show_error(message: &str) {
    console::log_1(&message.into());

    let Some(window) = web_sys::window()
    else {
        return;
    };

    let Some(document) = window.document()
    else {
        return;
    };

    let Some(message_elem) = document.get_element_by_id(MESSAGE_ID)
    else {
        return;
    };

    message_elem.set_text_content(Some(message));
}

struct Context {
    document: web_sys::HtmlDocument,
    window: web_sys::Window,
    message: web_sys::HtmlElement,
}

impl Context {
    fn new() -> Result<Context, String> {
        let Some(window) = web_sys::window()
        else {
            return Err("failed to get window".to_string());
        };

        let Some(document) = window.document()
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        else {
            return Err("failed to get document".to_string());
        };

        let Some(message) = document.get_element_by_id(MESSAGE_ID)
            .and_then(|c| c.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return Err("failed to get message div".to_string());
        };

        Ok(Context {
            document,
            window,
            message,
        })
    }
}

type PromiseClosure = Closure::<dyn FnMut(JsValue)>;

struct Loader {
    context: Context,

    response_closure: Option<PromiseClosure>,
    json_closure: Option<PromiseClosure>,
    fetch_error_closure: Option<PromiseClosure>,

    floating_pointer: Option<*mut Loader>,
}

impl Loader {
    fn new(context: Context) -> Loader {
        Loader {
            context,
            response_closure: None,
            json_closure: None,
            fetch_error_closure: None,
            floating_pointer: None,
        }
    }

    fn start_floating(self) -> *mut Loader {
        assert!(self.floating_pointer.is_none());

        let floating_pointer = Box::into_raw(Box::new(self));

        unsafe {
            (*floating_pointer).floating_pointer = Some(floating_pointer);
        }

        floating_pointer
    }

    fn stop_floating(&mut self) -> Loader {
        match self.floating_pointer {
            Some(floating_pointer) => unsafe {
                // This should end up destroying the loader and
                // invalidating any closures that it holds
                *Box::from_raw(floating_pointer)
            },
            None => unreachable!(),
        }
    }

    fn queue_template_load(&mut self) {
        let filename = get_template_filename(&self.context);

        let floating_pointer = self.floating_pointer.unwrap();

        let response_closure = PromiseClosure::new(move |v: JsValue| {
            let (json_closure, fetch_error_closure) = unsafe {
                (
                    (*floating_pointer).json_closure.as_ref().unwrap(),
                    (*floating_pointer).fetch_error_closure.as_ref().unwrap(),
                )
            };

            let response: web_sys::Response = v.dyn_into().unwrap();

            if !response.ok() {
                show_error(&format!(
                    "Error loading template: HTTP {}",
                    response.status(),
                ));
                unsafe {
                    (*floating_pointer).stop_floating();
                }
                return;
            }

            let Ok(promise) = response.json()
            else {
                show_error("Template is not valid JSON");
                unsafe {
                    (*floating_pointer).stop_floating();
                }
                return;
            };

            let _ = promise.then2(json_closure, fetch_error_closure);
        });

        let json_closure = PromiseClosure::new(move |v| {
            unsafe {
                (*floating_pointer).template_loaded(v);
            }
        });

        let fetch_error_closure = PromiseClosure::new(move |_| {
            show_error("Error loading template");
            unsafe {
                (*floating_pointer).stop_floating();
            }
        });

        let mut request_init = web_sys::RequestInit::new();
        request_init.cache(web_sys::RequestCache::NoCache);

        let promise = self.context.window.fetch_with_str_and_init(
            &filename,
            &request_init,
        );

        let _ = promise.then2(&response_closure, &fetch_error_closure);

        self.response_closure = Some(response_closure);
        self.json_closure = Some(json_closure);
        self.fetch_error_closure = Some(fetch_error_closure);
    }

    fn template_loaded(&mut self, data: JsValue) {
        match parse_template(data) {
            Err(_) => {
                self.stop_floating();
            },
            Ok(template) => self.start_game(template),
        }
    }

    fn start_game(&mut self, template: Template) {
        let Loader { context, .. } = self.stop_floating();

        match Crossword::new(context, template) {
            Ok(crossword) => {
                // Leak the main crossword object so that it will live
                // as long as the web page
                std::mem::forget(crossword);
            },
            Err(e) => show_error(&e.to_string()),
        }
    }
}

struct Cell {
    container: web_sys::HtmlElement,
    input: web_sys::HtmlInputElement,
}

struct Crossword {
    context: Context,
    keydown_closure: Option<Closure::<dyn Fn(JsValue)>>,
    input_closure: Option<Closure::<dyn Fn(JsValue)>>,
    focusin_closure: Option<Closure::<dyn Fn(JsValue)>>,
    clue_closure: Option<Closure::<dyn Fn(JsValue)>>,
    reset_closure: Option<Closure::<dyn Fn(JsValue)>>,
    timer_closure: Option<Closure::<dyn Fn(JsValue)>>,
    grid_element: web_sys::HtmlElement,
    across_clues: web_sys::HtmlElement,
    down_clues: web_sys::HtmlElement,
    puzzle: Puzzle,
    cells: Vec<Option<Cell>>,
    clues: HashMap<u32, web_sys::HtmlElement>,
    highlighted_word: Option<u32>,
}

impl Crossword {
    fn new(
        context: Context,
        template: Template,
    ) -> Result<Box<Crossword>, String> {
        // Check for all of the elements before touching the page so
        // that a failure doesn’t leave a half-built puzzle behind
        let Some(grid_element) = context.document.get_element_by_id(GRID_ID)
            .and_then(|c| c.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return Err("failed to get crossword grid".to_string());
        };

        let Some(across_clues) =
            context.document.get_element_by_id(ACROSS_CLUES_ID)
            .and_then(|c| c.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return Err("failed to get across clues".to_string());
        };

        let Some(down_clues) =
            context.document.get_element_by_id(DOWN_CLUES_ID)
            .and_then(|c| c.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return Err("failed to get down clues".to_string());
        };

        let puzzle = Puzzle::new(template).map_err(|e| e.to_string())?;

        let mut crossword = Box::new(Crossword {
            context,
            keydown_closure: None,
            input_closure: None,
            focusin_closure: None,
            clue_closure: None,
            reset_closure: None,
            timer_closure: None,
            grid_element,
            across_clues,
            down_clues,
            puzzle,
            cells: Vec::new(),
            clues: HashMap::new(),
            highlighted_word: None,
        });

        // Everything is built off-page first so that a failure part
        // way through leaves the containers untouched
        let document = &crossword.context.document;
        let cell_fragment = document.create_document_fragment();
        let across_fragment = document.create_document_fragment();
        let down_fragment = document.create_document_fragment();

        crossword.create_cells(&cell_fragment)?;
        crossword.create_clue_lists(&across_fragment, &down_fragment)?;

        crossword.attach(&cell_fragment, &across_fragment, &down_fragment);

        crossword.create_closures();
        crossword.set_up_reset_button();
        crossword.update_progress();

        crossword.show_game_contents();

        Ok(crossword)
    }

    fn create_closures(&mut self) {
        let crossword_pointer = self as *mut Crossword;

        let keydown_closure = Closure::<dyn Fn(JsValue)>::new(
            move |event: JsValue| {
                let crossword = unsafe { &mut *crossword_pointer };
                let event: web_sys::KeyboardEvent = event.dyn_into().unwrap();
                crossword.handle_keydown_event(event);
            }
        );

        let _ = self.grid_element.add_event_listener_with_callback(
            "keydown",
            keydown_closure.as_ref().unchecked_ref(),
        );

        self.keydown_closure = Some(keydown_closure);

        let input_closure = Closure::<dyn Fn(JsValue)>::new(
            move |event: JsValue| {
                let crossword = unsafe { &mut *crossword_pointer };
                let event: web_sys::Event = event.dyn_into().unwrap();
                crossword.handle_input_event(event);
            }
        );

        let _ = self.grid_element.add_event_listener_with_callback(
            "input",
            input_closure.as_ref().unchecked_ref(),
        );

        self.input_closure = Some(input_closure);

        let focusin_closure = Closure::<dyn Fn(JsValue)>::new(
            move |event: JsValue| {
                let crossword = unsafe { &mut *crossword_pointer };
                let event: web_sys::Event = event.dyn_into().unwrap();
                crossword.handle_focusin_event(event);
            }
        );

        let _ = self.grid_element.add_event_listener_with_callback(
            "focusin",
            focusin_closure.as_ref().unchecked_ref(),
        );

        self.focusin_closure = Some(focusin_closure);

        let clue_closure = Closure::<dyn Fn(JsValue)>::new(
            move |event: JsValue| {
                let crossword = unsafe { &mut *crossword_pointer };
                let event: web_sys::Event = event.dyn_into().unwrap();
                crossword.handle_clue_click(event);
            }
        );

        for list in [&self.across_clues, &self.down_clues] {
            let _ = list.add_event_listener_with_callback(
                "click",
                clue_closure.as_ref().unchecked_ref(),
            );
        }

        self.clue_closure = Some(clue_closure);

        let timer_closure = Closure::<dyn Fn(JsValue)>::new(
            move |id: JsValue| {
                let crossword = unsafe { &mut *crossword_pointer };

                if let Some(id) = id.as_f64() {
                    crossword.handle_timer(id as u32);
                }
            }
        );

        self.timer_closure = Some(timer_closure);
    }

    fn set_up_reset_button(&mut self) {
        let crossword_pointer = self as *mut Crossword;

        let reset_closure = Closure::<dyn Fn(JsValue)>::new(
            move |_event: JsValue| {
                let crossword = unsafe { &mut *crossword_pointer };
                crossword.handle_reset();
            }
        );

        let Some(reset_button) =
            self.context.document.get_element_by_id(RESET_BUTTON_ID)
            .and_then(|c| c.dyn_into::<web_sys::EventTarget>().ok())
        else {
            return;
        };

        let _ = reset_button.add_event_listener_with_callback(
            "click",
            reset_closure.as_ref().unchecked_ref(),
        );

        self.reset_closure = Some(reset_closure);
    }

    fn create_html_element(
        &self,
        name: &str,
    ) -> Result<web_sys::HtmlElement, String> {
        self.context.document.create_element(name)
            .ok()
            .and_then(|c| c.dyn_into::<web_sys::HtmlElement>().ok())
            .ok_or_else(|| format!("failed to create {} element", name))
    }

    fn create_cell(
        &self,
        x: u32,
        y: u32,
    ) -> Result<Cell, String> {
        let container = self.create_html_element("div")?;
        let _ = container.set_attribute("class", "cell");

        if let Some(number) = self.puzzle.words().number_starting_at(x, y) {
            let label = self.create_html_element("span")?;
            let _ = label.set_attribute("class", "number");
            set_element_text(&label, &number.to_string());
            let _ = container.append_with_node_1(&label);
        }

        let Some(input) = self.context.document.create_element("input").ok()
            .and_then(|i| i.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return Err("failed to create input element".to_string());
        };

        input.set_type("text");
        input.set_max_length(1);
        input.set_id(&format!("{}{}-{}", CELL_ID_PREFIX, x, y));
        let _ = input.set_attribute("autocomplete", "off");
        let _ = input.set_attribute("autocapitalize", "characters");
        let _ = container.append_with_node_1(&input);

        Ok(Cell {
            container,
            input,
        })
    }

    fn create_cells(
        &mut self,
        fragment: &web_sys::DocumentFragment,
    ) -> Result<(), String> {
        for (x, y) in (0..self.puzzle.height())
            .map(|y| (0..self.puzzle.width()).map(move |x| (x, y)))
            .flatten()
        {
            if !self.puzzle.grid().is_occupied(x, y) {
                let blocked = self.create_html_element("div")?;
                let _ = blocked.set_attribute("class", "cell blocked");
                let _ = fragment.append_with_node_1(&blocked);
                self.cells.push(None);
                continue;
            }

            let cell = self.create_cell(x, y)?;

            let _ = fragment.append_with_node_1(&cell.container);

            self.cells.push(Some(cell));
        }

        Ok(())
    }

    fn create_clue_lists(
        &mut self,
        across_fragment: &web_sys::DocumentFragment,
        down_fragment: &web_sys::DocumentFragment,
    ) -> Result<(), String> {
        for word in self.puzzle.words().words() {
            let item = self.create_html_element("li")?;

            item.set_id(&format!("clue-{}", word.number));
            let _ = item.set_attribute("data-number", &word.number.to_string());
            set_element_text(
                &item,
                &format!("{}. {}", word.number, word.clue),
            );

            let list = match word.direction {
                Direction::Across => across_fragment,
                Direction::Down => down_fragment,
            };

            let _ = list.append_with_node_1(&item);

            self.clues.entry(word.number).or_insert(item);
        }

        Ok(())
    }

    fn attach(
        &self,
        cell_fragment: &web_sys::DocumentFragment,
        across_fragment: &web_sys::DocumentFragment,
        down_fragment: &web_sys::DocumentFragment,
    ) {
        let _ = self.grid_element.style().set_property(
            "grid-template-columns",
            &format!("repeat({}, 1fr)", self.puzzle.width()),
        );

        let _ = self.grid_element.append_with_node_1(cell_fragment);
        let _ = self.across_clues.append_with_node_1(across_fragment);
        let _ = self.down_clues.append_with_node_1(down_fragment);
    }

    fn show_game_contents(&self) {
        let _ = self.context.message.style().set_property("display", "none");

        if let Some(content) =
            self.context.document.get_element_by_id(CONTENT_ID)
            .and_then(|c| c.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = content.class_list().remove_1("loading");
        }
    }

    fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        if x >= self.puzzle.width() || y >= self.puzzle.height() {
            return None;
        }

        self.cells[(y * self.puzzle.width() + x) as usize].as_ref()
    }

    fn word_cells<'a>(
        &'a self,
        word: &'a Word,
    ) -> impl Iterator<Item = &'a Cell> + 'a {
        word.cells().filter_map(|(x, y)| self.cell(x, y))
    }

    fn set_word_class(&self, number: u32, class: &str, value: bool) {
        let Some(word) = self.puzzle.words().word_at(number)
        else {
            return;
        };

        for cell in self.word_cells(word) {
            set_class(&cell.container, class, value);
        }
    }

    fn update_progress(&self) {
        let Some(progress) =
            self.context.document.get_element_by_id(PROGRESS_ID)
        else {
            return;
        };

        set_element_text(
            &progress,
            &format!(
                "{} / {} words",
                self.puzzle.n_completed(),
                self.puzzle.words().words().len(),
            ),
        );
    }

    fn highlight_word(&mut self, number: Option<u32>) {
        if let Some(old) = self.highlighted_word.take() {
            self.set_word_class(old, "highlight", false);

            if let Some(clue) = self.clues.get(&old) {
                set_class(clue, "highlight", false);
            }
        }

        if let Some(number) = number {
            self.set_word_class(number, "highlight", true);

            if let Some(clue) = self.clues.get(&number) {
                set_class(clue, "highlight", true);
            }
        }

        self.highlighted_word = number;
    }

    fn focus_input(&self, x: u32, y: u32) {
        let Some(cell) = self.cell(x, y)
        else {
            return;
        };

        let input: &web_sys::Element = cell.input.as_ref();

        if self.context.document.active_element().as_ref() != Some(input) {
            let _ = cell.input.focus();
        }
    }

    fn schedule_timer(&self, id: u32, delay_ms: u32) {
        let Some(timer_closure) = self.timer_closure.as_ref()
        else {
            return;
        };

        if self.context.window
            .set_timeout_with_callback_and_timeout_and_arguments_1(
                timer_closure.as_ref().unchecked_ref(),
                delay_ms as i32,
                &JsValue::from(id),
            ).is_err()
        {
            console::log_1(&"Error setting timeout".into());
        }
    }

    fn clear_all_cells(&self) {
        for cell in self.cells.iter().filter_map(Option::as_ref) {
            cell.input.set_value("");

            for class in ["correct", "incorrect", "shake", "completed", "flash"] {
                set_class(&cell.container, class, false);
            }
        }

        for clue in self.clues.values() {
            set_class(clue, "completed", false);
        }
    }

    fn flush_puzzle_changes(&mut self) {
        for notification in self.puzzle.pending_notifications() {
            match notification {
                Notification::LetterValidated { x, y, letter, correct } => {
                    if let Some(cell) = self.cell(x, y) {
                        cell.input.set_value(&letter.to_string());
                        set_class(&cell.container, "correct", correct);
                        set_class(&cell.container, "incorrect", !correct);
                        set_class(&cell.container, "shake", !correct);
                    }
                },
                Notification::LetterCleared { x, y } => {
                    if let Some(cell) = self.cell(x, y) {
                        cell.input.set_value("");
                        set_class(&cell.container, "correct", false);
                        set_class(&cell.container, "incorrect", false);
                        set_class(&cell.container, "shake", false);
                    }
                },
                Notification::ErrorCleared { x, y } => {
                    if let Some(cell) = self.cell(x, y) {
                        set_class(&cell.container, "shake", false);
                    }
                },
                Notification::WordCompleted { number } => {
                    self.set_word_class(number, "completed", true);
                    self.set_word_class(number, "flash", true);

                    if let Some(clue) = self.clues.get(&number) {
                        set_class(clue, "completed", true);
                    }

                    self.update_progress();
                },
                Notification::FlashCleared { number } => {
                    self.set_word_class(number, "flash", false);
                },
                Notification::FocusChanged { x, y } => {
                    self.focus_input(x, y);
                },
                Notification::WordHighlighted { number } => {
                    self.highlight_word(Some(number));
                },
                Notification::PuzzleReset => {
                    self.clear_all_cells();
                    self.highlight_word(None);
                    self.update_progress();
                },
                Notification::TimerScheduled { id, delay_ms } => {
                    self.schedule_timer(id, delay_ms);
                },
            }
        }
    }

    fn position_for_event(&self, event: &web_sys::Event) -> Option<(u32, u32)> {
        let input = event.target()?
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()?;

        let id = input.id();
        let (x, y) = id.strip_prefix(CELL_ID_PREFIX)?.split_once('-')?;

        Some((x.parse().ok()?, y.parse().ok()?))
    }

    fn handle_keydown_event(&mut self, event: web_sys::KeyboardEvent) {
        let Some((x, y)) = self.position_for_event(&event)
        else {
            return;
        };

        let key = match event.key().as_str() {
            "Backspace" => Key::Backspace,
            "Tab" => Key::Tab,
            "ArrowLeft" => Key::Arrow(Arrow::Left),
            "ArrowRight" => Key::Arrow(Arrow::Right),
            "ArrowUp" => Key::Arrow(Arrow::Up),
            "ArrowDown" => Key::Arrow(Arrow::Down),
            _ => Key::Other,
        };

        let modifiers = Modifiers {
            shift: event.shift_key(),
        };

        if self.puzzle.press_key(key, x, y, modifiers) {
            event.prevent_default();
        }

        self.flush_puzzle_changes();
    }

    fn handle_input_event(&mut self, event: web_sys::Event) {
        let Some((x, y)) = self.position_for_event(&event)
        else {
            return;
        };

        let Some(value) = self.cell(x, y).map(|cell| cell.input.value())
        else {
            return;
        };

        if let Some(letter) = value.chars().last() {
            self.puzzle.type_letter(x, y, letter);
        }

        // Put back whatever the puzzle thinks is in the cell in case
        // the character was rejected
        if let Some(cell) = self.cell(x, y) {
            let text = self.puzzle.letter(x, y)
                .map(|letter| letter.to_string())
                .unwrap_or_default();
            cell.input.set_value(&text);
        }

        self.flush_puzzle_changes();
    }

    fn handle_focusin_event(&mut self, event: web_sys::Event) {
        let Some((x, y)) = self.position_for_event(&event)
        else {
            return;
        };

        // Select the letter so that typing replaces it
        if let Some(cell) = self.cell(x, y) {
            cell.input.select();
        }

        self.puzzle.focus_cell(x, y);
        self.flush_puzzle_changes();
    }

    fn handle_clue_click(&mut self, event: web_sys::Event) {
        let Some(number) = event.target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|e| e.closest("li").ok().flatten())
            .and_then(|li| li.get_attribute("data-number"))
            .and_then(|n| n.parse::<u32>().ok())
        else {
            return;
        };

        self.puzzle.select_clue(number);
        self.flush_puzzle_changes();
    }

    fn handle_reset(&mut self) {
        match self.context.window.confirm_with_message(RESET_QUESTION) {
            Ok(true) => {
                self.puzzle.reset();
                self.flush_puzzle_changes();
            },
            Ok(false) => (),
            Err(_) => console::log_1(&"Error asking for confirmation".into()),
        }
    }

    fn handle_timer(&mut self, id: u32) {
        self.puzzle.fire_timer(id);
        self.flush_puzzle_changes();
    }
}

fn get_number(data: &JsValue, key: &str) -> Result<u32, ()> {
    Reflect::get(data, &key.into())
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|&v| v >= 0.0 && v <= u32::MAX as f64)
        .map(|v| v as u32)
        .ok_or_else(|| {
            show_error(&format!("Error getting {} from template", key));
            ()
        })
}

fn get_string(data: &JsValue, key: &str) -> Result<String, ()> {
    Reflect::get(data, &key.into())
        .ok()
        .and_then(|v| v.as_string())
        .ok_or_else(|| {
            show_error(&format!("Error getting {} from template", key));
            ()
        })
}

fn parse_word(data: &JsValue) -> Result<Word, ()> {
    let Ok(direction) = get_string(data, "direction")?.parse::<Direction>()
    else {
        show_error("Unknown word direction");
        return Err(());
    };

    let text = get_string(data, "text")?.to_uppercase();

    if text.is_empty() {
        show_error("Empty word in template");
        return Err(());
    }

    Ok(Word {
        number: get_number(data, "number")?,
        direction,
        x: get_number(data, "x")?,
        y: get_number(data, "y")?,
        text,
        clue: get_string(data, "clue")?,
    })
}

fn parse_template(data: JsValue) -> Result<Template, ()> {
    let columns = get_number(&data, "columns")?;
    let rows = get_number(&data, "rows")?;

    if grid::n_cells(columns, rows).is_none() {
        show_error("Template grid is too large");
        return Err(());
    }

    let Ok(words_array) = Reflect::get(&data, &"words".into())
        .map_err(|_| ())
        .and_then(|v| TryInto::<js_sys::Array>::try_into(v).map_err(|_| ()))
    else {
        show_error("Error getting word list");
        return Err(());
    };

    let mut words = Vec::new();

    for word in words_array.iter() {
        words.push(parse_word(&word)?);
    }

    Ok(Template {
        columns,
        rows,
        words,
    })
}

fn clear_element(element: &web_sys::Element) {
    while let Some(child) = element.first_child() {
        let _ = element.remove_child(&child);
    }
}

fn set_element_text(element: &web_sys::Element, text: &str) {
    clear_element(element);

    if let Some(document) = element.owner_document() {
        let text = document.create_text_node(text);
        let _ = element.append_with_node_1(&text);
    }
}

fn set_class(element: &web_sys::Element, class: &str, value: bool) {
    let class_list = element.class_list();

    if value {
        let _ = class_list.add_1(class);
    } else {
        let _ = class_list.remove_1(class);
    }
}

fn get_template_filename(context: &Context) -> String {
    context.document.location()
        .and_then(|location| location.search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get(TEMPLATE_PARAM))
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string())
}

#[wasm_bindgen]
pub fn init_crossword() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let context = match Context::new() {
        Ok(c) => c,
        Err(e) => {
            show_error(&e);
            return;
        }
    };

    let loader = Loader::new(context);

    let floating_pointer = loader.start_floating();

    unsafe {
        (*floating_pointer).queue_template_load();
    }
}
