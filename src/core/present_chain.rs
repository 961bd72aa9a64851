use super::rasterizer::FrameTarget;
use super::surface_size::SurfaceSize;

pub const DEFAULT_BUFFER_COUNT: usize = 4;
const MIN_BUFFER_COUNT: usize = 2;

/// Ring of off-screen frame buffers
///
/// The buffer being drawn is never the one last completed, so the shown
/// frame is always whole. Buffers keep the size they were allocated with
/// until `reallocate` is called.
#[derive(Debug)]
pub struct PresentChain {
    buffers: Vec<Vec<u32>>,
    size: SurfaceSize,
    next: usize,
    shown: Option<usize>,
}

impl PresentChain {
    pub fn new(count: usize, size: SurfaceSize) -> Self {
        let count = count.max(MIN_BUFFER_COUNT);
        Self {
            buffers: (0..count).map(|_| vec![0; size.pixel_count()]).collect(),
            size,
            next: 0,
            shown: None,
        }
    }

    /// Borrow the next buffer for drawing
    pub fn acquire(&mut self) -> FrameGuard<'_> {
        let index = self.next;
        FrameGuard {
            chain: self,
            index,
            completed: false,
        }
    }

    /// Pixels of the last completed frame
    pub fn shown(&self) -> Option<&[u32]> {
        self.shown.map(|index| self.buffers[index].as_slice())
    }

    /// Drop every buffer and allocate new ones at `size`
    pub fn reallocate(&mut self, size: SurfaceSize) {
        log::debug!(
            "reallocating {} presentation buffers at {}x{}",
            self.buffers.len(),
            size.width(),
            size.height()
        );
        for buffer in &mut self.buffers {
            buffer.clear();
            buffer.resize(size.pixel_count(), 0);
        }
        self.size = size;
        self.next = 0;
        self.shown = None;
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    // Never hand out the shown buffer, even after abandoned frames.
    fn advance(&mut self) {
        self.next = (self.next + 1) % self.buffers.len();
        if Some(self.next) == self.shown {
            self.next = (self.next + 1) % self.buffers.len();
        }
    }
}

/// Exclusive access to one buffer of the chain
///
/// `complete` publishes the frame. Dropping the guard without completing
/// releases the buffer and keeps the previous frame on show.
pub struct FrameGuard<'a> {
    chain: &'a mut PresentChain,
    index: usize,
    completed: bool,
}

impl FrameGuard<'_> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn target(&mut self) -> FrameTarget<'_> {
        let size = self.chain.size;
        FrameTarget {
            pixels: &mut self.chain.buffers[self.index],
            width: size.width(),
            height: size.height(),
        }
    }

    pub fn complete(mut self) {
        self.completed = true;
        self.chain.shown = Some(self.index);
    }
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            log::warn!("presentation buffer {} released without a completed frame", self.index);
        }
        self.chain.advance();
    }
}
