//! Serializable session events.
//!
//! Hosts that record their input can replay it through [`CropSession::apply`]
//! and get exactly the state the live session had.

use cropkit_core::{ImageSize, Point, Result, Size};
use serde::{Deserialize, Serialize};

use super::{CropSession, PointerMove};
use crate::aspect_ratio::AspectRatio;
use crate::mapping::PixelRect;

/// One host event, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    ImageLoaded { width: u32, height: u32 },
    Layout { display: Size, canvas: Size },
    StartCropping,
    Close,
    SelectRatio { ratio: AspectRatio },
    PointerDown { position: Point },
    PointerMove(PointerMove),
    PointerUp,
    Confirm,
}

impl CropSession {
    /// Applies one event. Returns the confirmed pixel region for
    /// [`SessionEvent::Confirm`] and `None` for everything else.
    pub fn apply(&mut self, event: &SessionEvent) -> Result<Option<PixelRect>> {
        match event {
            SessionEvent::ImageLoaded { width, height } => {
                self.load_image(ImageSize::new(*width, *height))
            }
            SessionEvent::Layout { display, canvas } => self.set_layout(*display, *canvas),
            SessionEvent::StartCropping => self.start_cropping(),
            SessionEvent::Close => self.close(),
            SessionEvent::SelectRatio { ratio } => self.select_ratio(*ratio),
            SessionEvent::PointerDown { position } => self.pointer_down(*position),
            SessionEvent::PointerMove(movement) => {
                self.pointer_move(*movement);
            }
            SessionEvent::PointerUp => {
                self.pointer_up();
            }
            SessionEvent::Confirm => return self.confirm().map(Some),
        }
        Ok(None)
    }

    /// Applies `events` in order, returning the last confirmed region.
    ///
    /// Stops at the first failing event.
    pub fn replay<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a SessionEvent>,
    ) -> Result<Option<PixelRect>> {
        let mut confirmed = None;
        for event in events {
            if let Some(rect) = self.apply(event)? {
                confirmed = Some(rect);
            }
        }
        Ok(confirmed)
    }
}
