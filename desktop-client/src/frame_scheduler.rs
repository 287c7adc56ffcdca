use common::games::snake::{FrameHandle, FrameScheduler};
use eframe::egui;

/// Frame requests on top of egui repaints.
///
/// egui cannot take back a repaint, so cancelling only forgets the handle:
/// the next update then finds nothing due.
pub struct EguiFrameScheduler {
    ctx: egui::Context,
    next_handle: FrameHandle,
    pending: Option<FrameHandle>,
}

impl EguiFrameScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_handle: 0,
            pending: None,
        }
    }

    /// Consumes the outstanding request, if any.
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for EguiFrameScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_handle += 1;
        self.pending = Some(self.next_handle);
        self.ctx.request_repaint();
        self.next_handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}
