//! Event recording and replay.

use std::convert::Infallible;

use crate::markup::{Attributes, MarkupSink};

/// One recorded markup notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open { name: String, attributes: Attributes },
    Text(String),
    Close,
}

impl Event {
    pub fn open(name: impl Into<String>, attributes: Attributes) -> Self {
        Event::Open {
            name: name.into(),
            attributes,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Event::Text(text.into())
    }
}

/// A [`MarkupSink`] that stores every event it receives.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Vec<Event>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl MarkupSink for EventRecorder {
    type Error = Infallible;

    fn open_element(&mut self, name: &str, attributes: &Attributes) -> Result<(), Self::Error> {
        self.events.push(Event::open(name, attributes.clone()));
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), Self::Error> {
        self.events.push(Event::text(text));
        Ok(())
    }

    fn close_element(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::Close);
        Ok(())
    }
}

/// Feed `events` to `sink` in order, stopping at the first error.
pub fn replay<'a, S, I>(events: I, sink: &mut S) -> Result<(), S::Error>
where
    S: MarkupSink,
    I: IntoIterator<Item = &'a Event>,
{
    for event in events {
        match event {
            Event::Open { name, attributes } => sink.open_element(name, attributes)?,
            Event::Text(text) => sink.text(text)?,
            Event::Close => sink.close_element()?,
        }
    }
    Ok(())
}
