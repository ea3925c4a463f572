use crate::pacing::Pacer;
use crate::step::Trace;

#[derive(Clone, Debug)]
pub struct Replay<S> {
    trace: Trace<S>,
    position: usize,
}

impl<S> Replay<S> {
    pub fn new(trace: Trace<S>) -> Self {
        Self { trace, position: 0 }
    }

    pub fn trace(&self) -> &Trace<S> {
        &self.trace
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&S> {
        self.trace.get(self.position)
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    pub fn step_forward(&mut self) -> Option<&S> {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.current()
    }

    pub fn step_back(&mut self) -> Option<&S> {
        self.position = self.position.saturating_sub(1);
        self.current()
    }

    pub fn seek(&mut self, index: usize) -> Option<&S> {
        self.position = index.min(self.trace.len().saturating_sub(1));
        self.current()
    }

    pub fn jump_to_start(&mut self) -> Option<&S> {
        self.seek(0)
    }

    pub fn jump_to_end(&mut self) -> Option<&S> {
        self.seek(usize::MAX)
    }

    pub fn auto_advance<F: FnMut(usize, &S)>(&mut self, pacer: &Pacer, mut show: F) {
        while !self.is_at_end() {
            self.position += 1;
            show(self.position, &self.trace[self.position]);
            pacer.pause();
        }
    }

    pub fn progress_label(&self) -> String {
        if self.trace.is_empty() {
            return "Step 0 of 0".to_string();
        }
        format!("Step {} of {}", self.position + 1, self.trace.len())
    }
}
