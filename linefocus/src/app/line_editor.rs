// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{AfterRender, AppSignal, ClipboardService, ControlButton, ControlsLayout,
            DEBUG_LINEFOCUS_MOD, Document, EditorState, EventPropagation, FrameArgs,
            HitTarget, InputEvent, Key, KeyPress, LineHandleTable, Locale, MouseInput,
            MouseInputKind, Notice, RenderOps, Size, UiStrings, render_frame,
            spawn_copy_all};

/// The editor component. It owns the [`EditorState`] along with everything that only
/// matters on screen: which box has input focus, the scroll offset, the notice, and the
/// side tables of the last frame.
///
/// The main event loop drives it like this:
/// 1. [`Self::handle_input_event`] or [`Self::handle_signal`] mutates state.
/// 2. On [`EventPropagation::ConsumedRender`], [`Self::render`] builds the next frame
///    and the caller paints it.
/// 3. [`Self::run_after_render_hooks`] runs the queued [`AfterRender`] hooks against
///    that frame, and returns a few more ops for the caller to paint.
#[derive(Debug)]
pub struct LineEditor {
    state: EditorState,
    /// Line whose box has input focus. [`None`] when a control button took it, in which
    /// case keystrokes (other than shortcuts) go nowhere.
    focus: Option<usize>,
    notice: Option<Notice>,
    strings: &'static UiStrings,
    window: Size,
    scroll_top: usize,
    handles: LineHandleTable,
    controls: ControlsLayout,
    after_render: Vec<AfterRender>,
    clipboard: Arc<dyn ClipboardService>,
    sender: mpsc::Sender<AppSignal>,
}

impl LineEditor {
    #[must_use]
    pub fn new(
        document: Document,
        locale: Locale,
        window: Size,
        clipboard: Arc<dyn ClipboardService>,
        sender: mpsc::Sender<AppSignal>,
    ) -> Self {
        let mut it = Self {
            state: EditorState::new(document),
            focus: None,
            notice: None,
            strings: locale.strings(),
            window,
            scroll_top: 0,
            handles: LineHandleTable::default(),
            controls: ControlsLayout::default(),
            after_render: vec![],
            clipboard,
            sender,
        };
        // The editor starts in focus mode, with the first line focused.
        it.queue_after_render(AfterRender::RestoreFocus { index: 0 });
        it
    }

    #[must_use]
    pub fn state(&self) -> &EditorState { &self.state }

    #[must_use]
    pub fn focus(&self) -> Option<usize> { self.focus }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> { self.notice.as_ref() }

    #[must_use]
    pub fn handles(&self) -> &LineHandleTable { &self.handles }

    #[must_use]
    pub fn controls(&self) -> &ControlsLayout { &self.controls }
}

/// Event routing.
impl LineEditor {
    pub fn handle_input_event(&mut self, input_event: InputEvent) -> EventPropagation {
        DEBUG_LINEFOCUS_MOD.then(|| {
            tracing::debug!(
                message = "LineEditor::handle_input_event",
                input_event = ?input_event,
                state = %self.state,
                focus = ?self.focus,
            );
        });

        if let InputEvent::Resize(size) = input_event {
            self.window = size;
            return EventPropagation::ConsumedRender;
        }

        if self.notice.is_some() {
            if Notice::is_dismissed_by(&input_event) {
                self.notice = None;
                return EventPropagation::ConsumedRender;
            }
            return EventPropagation::Consumed;
        }

        if self.window.is_too_small() {
            return EventPropagation::Consumed;
        }

        let result = match input_event {
            InputEvent::Keyboard(keypress) => self.route_keypress(keypress),
            InputEvent::Mouse(mouse_input) => self.route_mouse_input(mouse_input),
            InputEvent::BracketedPaste(text) => match self.focus {
                Some(index) => self.state.insert_text(index, &text),
                None => EventPropagation::Propagate,
            },
            InputEvent::Resize(_) => EventPropagation::Propagate,
        };

        // In focus mode the active line always gets focus back once the next frame is
        // on screen.
        if !self.state.show_all() {
            self.queue_after_render(AfterRender::RestoreFocus {
                index: self.state.active_index(),
            });
        }

        result
    }

    pub fn handle_signal(&mut self, signal: AppSignal) -> EventPropagation {
        match signal {
            AppSignal::CopyFinished(Ok(())) => {
                self.notice = Some(Notice::new(self.strings.copied_all));
                EventPropagation::ConsumedRender
            }
            AppSignal::CopyFinished(Err(error)) => {
                tracing::error!(message = self.strings.copy_failed, error = %error);
                EventPropagation::Consumed
            }
        }
    }

    fn route_keypress(&mut self, keypress: KeyPress) -> EventPropagation {
        if let Some(button) = shortcut_for(keypress) {
            return self.press(button);
        }

        let Some(index) = self.focus else {
            return EventPropagation::Propagate;
        };

        let result = self.state.handle_keypress(index, keypress, self.text_width());

        // Keyboard navigation moves focus along with the active line.
        if self.state.show_all() {
            self.focus = Some(self.state.active_index());
        }

        result
    }

    fn route_mouse_input(&mut self, mouse_input: MouseInput) -> EventPropagation {
        if mouse_input.kind != MouseInputKind::LeftClick {
            return EventPropagation::Propagate;
        }

        if let Some(button) = self.controls.hit_test(mouse_input.pos) {
            // The button takes focus away from the line boxes.
            self.focus = None;
            self.press(button);
            return EventPropagation::ConsumedRender;
        }

        match self.handles.hit_test(mouse_input.pos) {
            Some(HitTarget::Line { index, row, col }) => {
                let result = self.state.select_line(index);
                if !result.is_propagate() {
                    self.state.place_caret_at(row, col, self.text_width());
                    self.focus = Some(index);
                }
                result
            }
            Some(HitTarget::Background) => self.state.select_last_line(),
            None => EventPropagation::Propagate,
        }
    }

    fn press(&mut self, button: ControlButton) -> EventPropagation {
        match button {
            ControlButton::ToggleShowAll => {
                let was_show_all = self.state.show_all();
                let result = self.state.toggle_show_all();
                if was_show_all {
                    self.queue_after_render(AfterRender::RestoreFocus {
                        index: self.state.active_index(),
                    });
                }
                result
            }
            ControlButton::CopyAll => {
                self.copy_all();
                EventPropagation::Consumed
            }
        }
    }

    /// Fire and forget. The outcome comes back later as [`AppSignal::CopyFinished`].
    fn copy_all(&self) {
        let text = self.state.copy_all_text();
        DEBUG_LINEFOCUS_MOD.then(|| {
            tracing::debug!(message = "LineEditor::copy_all", bytes = text.len());
        });
        drop(spawn_copy_all(
            text,
            self.clipboard.clone(),
            self.sender.clone(),
        ));
    }

    fn text_width(&self) -> usize { usize::from(self.handles.area.size.cols) }
}

/// Rendering.
impl LineEditor {
    /// Builds the next frame and replaces the side tables of the previous one.
    pub fn render(&mut self) -> RenderOps {
        let frame = render_frame(FrameArgs {
            state: &self.state,
            strings: self.strings,
            window: self.window,
            scroll_top: self.scroll_top,
            notice: self.notice.as_ref(),
        });

        self.scroll_top = frame.handles.area.scroll_top;
        self.handles = frame.handles;
        self.controls = frame.controls;

        let mut ops = frame.ops;
        self.paint_cursor(&mut ops);
        ops
    }

    /// Drains the hook queue. Call this once the frame from [`Self::render`] has been
    /// painted. A hook whose line has no handle in that frame does nothing.
    pub fn run_after_render_hooks(&mut self) -> RenderOps {
        let mut focus_changed = false;

        for hook in std::mem::take(&mut self.after_render) {
            match hook {
                AfterRender::RestoreFocus { index } => {
                    if self.handles.get(index).is_some() && self.focus != Some(index) {
                        self.focus = Some(index);
                        focus_changed = true;
                    }
                }
            }
        }

        let mut ops = RenderOps::new();
        if focus_changed {
            self.paint_cursor(&mut ops);
        }
        ops
    }

    fn queue_after_render(&mut self, hook: AfterRender) {
        if !self.after_render.contains(&hook) {
            self.after_render.push(hook);
        }
    }

    /// The terminal cursor marks the caret of the focused box. It stays hidden while a
    /// notice is up, or when nothing (or a line other than the active one) has focus.
    fn paint_cursor(&self, ops: &mut RenderOps) {
        if self.notice.is_some() || self.focus != Some(self.state.active_index()) {
            return;
        }
        let (row, col) = self.state.caret_row_col(self.text_width());
        if let Some(pos) = self.handles.to_screen(self.state.active_index(), row, col) {
            ops.show_cursor_at(pos);
        }
    }
}

/// `Ctrl+T` and `Ctrl+Y` do what the control buttons do.
fn shortcut_for(keypress: KeyPress) -> Option<ControlButton> {
    if !keypress.mask.ctrl || keypress.mask.alt {
        return None;
    }
    match keypress.key {
        Key::Character('t' | 'T') => Some(ControlButton::ToggleShowAll),
        Key::Character('y' | 'Y') => Some(ControlButton::CopyAll),
        _ => None,
    }
}
