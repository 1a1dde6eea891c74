use engine::game::{Direction, Point};
use ringbuffer::{AllocRingBuffer, RingBuffer};
use std::sync::{Arc, Mutex};

use crate::constants::EVENT_LOG_SIZE;

#[derive(Debug, Clone)]
pub enum ClientCommand {
    Turn { direction: Direction },
}

/// Immutable snapshot of the game published by the game task after every
/// tick. The UI only ever reads these; it never touches the live state.
#[derive(Debug, Clone)]
pub struct GameView {
    pub snake: Vec<Point>,
    pub apple: Point,
    pub score: u32,
    pub mesh_length: usize,
    pub tick: u64,
}

/// A fetched and decoded background image. `generation` orders fetches so a
/// slow download cannot overwrite a newer one.
#[derive(Clone)]
pub struct BackgroundImage {
    pub pixels: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub generation: u64,
}

pub struct SharedState {
    view: Arc<Mutex<Option<GameView>>>,
    background: Arc<Mutex<Option<BackgroundImage>>>,
    events: Arc<Mutex<AllocRingBuffer<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            view: Arc::new(Mutex::new(None)),
            background: Arc::new(Mutex::new(None)),
            events: Arc::new(Mutex::new(AllocRingBuffer::new(EVENT_LOG_SIZE))),
        }
    }

    pub fn set_view(&self, view: GameView) {
        *self.view.lock().unwrap() = Some(view);
    }

    pub fn get_view(&self) -> Option<GameView> {
        self.view.lock().unwrap().clone()
    }

    pub fn set_background(&self, image: BackgroundImage) {
        let mut current = self.background.lock().unwrap();
        if let Some(existing) = current.as_ref()
            && existing.generation > image.generation
        {
            return;
        }
        *current = Some(image);
    }

    pub fn background_generation(&self) -> Option<u64> {
        self.background.lock().unwrap().as_ref().map(|b| b.generation)
    }

    pub fn get_background(&self) -> Option<BackgroundImage> {
        self.background.lock().unwrap().clone()
    }

    pub fn add_event(&self, event: String) {
        self.events.lock().unwrap().enqueue(event);
    }

    pub fn get_events(&self) -> Vec<String> {
        self.events.lock().unwrap().iter().cloned().collect()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            view: Arc::clone(&self.view),
            background: Arc::clone(&self.background),
            events: Arc::clone(&self.events),
        }
    }
}
