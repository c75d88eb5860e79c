//! Canvas input handling.
//!
//! Translates the frame's egui input into controller events. Positions are
//! made canvas-local by subtracting the canvas rectangle's origin.

use super::state::StitchApp;
use crate::controller::{Buttons, Flow, InputEvent, Key};
use crate::settings::PointerButton;
use crate::types::Vec2;
use eframe::egui;

impl StitchApp {
    /// Whether egui currently claims the pointer (hovering or dragging a window).
    pub fn ui_owns_pointer(ctx: &egui::Context) -> bool {
        ctx.is_pointer_over_area() || ctx.is_using_pointer()
    }

    /// Feeds this frame's input to the controller.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `canvas_rect` - Screen rectangle covered by the canvas
    ///
    /// # Returns
    ///
    /// `Flow::Terminate` if any event ended the session
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) -> Flow {
        let mut flow = Flow::Continue;

        if self.input.last_canvas_rect != Some(canvas_rect) {
            self.input.last_canvas_rect = Some(canvas_rect);
            self.controller.handle_event(
                InputEvent::Resize {
                    width: f64::from(canvas_rect.width()),
                    height: f64::from(canvas_rect.height()),
                },
                false,
            );
        }

        let ui_owns_pointer = Self::ui_owns_pointer(ctx);
        let ui_owns_keyboard = ctx.wants_keyboard_input();
        let (events, buttons, close_requested) = ctx.input(|i| {
            let buttons = Buttons {
                primary: i.pointer.primary_down(),
                secondary: i.pointer.secondary_down(),
                middle: i.pointer.middle_down(),
            };
            (i.events.clone(), buttons, i.viewport().close_requested())
        });

        if close_requested {
            flow = Flow::Terminate;
            self.controller.handle_event(InputEvent::Quit, ui_owns_pointer);
        }

        for event in events {
            let translated = match event {
                egui::Event::PointerMoved(pos) => {
                    let delta = self
                        .input
                        .last_pointer_pos
                        .map_or(egui::Vec2::ZERO, |last| pos - last);
                    self.input.last_pointer_pos = Some(pos);
                    Some(InputEvent::PointerMoved {
                        pos: Vec2::from(pos - canvas_rect.min),
                        delta: Vec2::from(delta),
                        buttons,
                    })
                }
                egui::Event::MouseWheel { delta, .. } => Some(InputEvent::Wheel {
                    delta_y: f64::from(delta.y),
                }),
                egui::Event::PointerButton {
                    button,
                    pressed: true,
                    ..
                } => match button {
                    egui::PointerButton::Primary => Some(PointerButton::Primary),
                    egui::PointerButton::Secondary => Some(PointerButton::Secondary),
                    egui::PointerButton::Middle => Some(PointerButton::Middle),
                    _ => None,
                }
                .map(InputEvent::PointerDown),
                egui::Event::Key {
                    key,
                    pressed: true,
                    ..
                } if !ui_owns_keyboard => match key {
                    egui::Key::Enter => Some(InputEvent::KeyDown(Key::Confirm)),
                    egui::Key::Escape => Some(InputEvent::KeyDown(Key::Cancel)),
                    _ => None,
                },
                _ => None,
            };

            if let Some(event) = translated {
                if self.controller.handle_event(event, ui_owns_pointer) == Flow::Terminate {
                    flow = Flow::Terminate;
                }
            }
        }

        flow
    }
}
