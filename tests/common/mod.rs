#![allow(dead_code)]

use std::{
    cell::RefCell,
    convert::Infallible,
    rc::Rc,
    sync::mpsc::{self, Receiver},
    thread,
    time::Duration,
};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorKind, ErrorType, OutputPin},
};
use ws2812_bitbang::delay::CycleDelay;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    High,
    Low,
    Wait(u32),
}

/// Everything the pin and the delay did, in order.
#[derive(Clone, Default)]
pub struct Timeline(Rc<RefCell<Vec<Event>>>);

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn pin(&self) -> RecordingPin {
        RecordingPin {
            timeline: self.clone(),
        }
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay {
            timeline: self.clone(),
        }
    }
}

pub struct RecordingPin {
    timeline: Timeline,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.timeline.push(Event::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.timeline.push(Event::High);
        Ok(())
    }
}

pub struct RecordingDelay {
    timeline: Timeline,
}

impl CycleDelay for RecordingDelay {
    fn delay_cycles(&mut self, cycles: u32) {
        self.timeline.push(Event::Wait(cycles));
    }
}

/// At the first rising edge, another thread tries to enter the critical
/// section. Whether it got in while the pin was still being driven is
/// written down; `entered` fires once it does.
#[derive(Default)]
pub struct ContendedPin {
    pub entered: Option<Receiver<()>>,
    pub entered_during_frame: Option<bool>,
}

impl ErrorType for ContendedPin {
    type Error = Infallible;
}

impl OutputPin for ContendedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.entered.is_none() {
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || {
                critical_section::with(|_| {
                    let _ = tx.send(());
                })
            });
            self.entered_during_frame =
                Some(rx.recv_timeout(Duration::from_millis(100)).is_ok());
            self.entered = Some(rx);
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Records like [RecordingPin], but reports an error on every call once
/// `healthy_calls` calls went through.
pub struct FlakyPin {
    pub timeline: Timeline,
    pub healthy_calls: usize,
}

impl FlakyPin {
    fn record(&mut self, event: Event) -> Result<(), PinFault> {
        self.timeline.push(event);
        if self.healthy_calls == 0 {
            Err(PinFault)
        } else {
            self.healthy_calls -= 1;
            Ok(())
        }
    }
}

impl ErrorType for FlakyPin {
    type Error = PinFault;
}

impl OutputPin for FlakyPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(Event::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(Event::High)
    }
}

/// A nanosecond delay that only writes down what it was asked for.
#[derive(Default)]
pub struct NsLog(pub Rc<RefCell<Vec<u32>>>);

impl DelayNs for NsLog {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().push(ns);
    }
}

/// One bit on the wire: cycles spent high, then cycles spent low until the
/// next rising edge (or the end of the timeline).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pulse {
    pub high: u32,
    pub low: u32,
}

/// Splits a timeline into pulses. Everything before the first rising edge
/// is skipped.
pub fn pulses(events: &[Event]) -> Vec<Pulse> {
    let mut pulses = Vec::new();
    let mut current: Option<Pulse> = None;
    let mut is_high = false;

    for event in events {
        match *event {
            Event::High => {
                if let Some(pulse) = current.take() {
                    pulses.push(pulse);
                }
                current = Some(Pulse { high: 0, low: 0 });
                is_high = true;
            }
            Event::Low => is_high = false,
            Event::Wait(cycles) => {
                if let Some(pulse) = current.as_mut() {
                    if is_high {
                        pulse.high += cycles;
                    } else {
                        pulse.low += cycles;
                    }
                }
            }
        }
    }
    pulses.extend(current);

    pulses
}

/// Turns pulses back into bytes, MSB first.
pub fn decode(pulses: &[Pulse], zero_high: u32, one_high: u32) -> Vec<u8> {
    assert_eq!(pulses.len() % 8, 0, "incomplete byte on the wire");

    pulses
        .chunks(8)
        .map(|byte| {
            byte.iter().fold(0u8, |acc, pulse| {
                let bit = match pulse.high {
                    h if h == one_high => 1,
                    h if h == zero_high => 0,
                    h => panic!("pulse of {} cycles is neither a 0 nor a 1", h),
                };
                (acc << 1) | bit
            })
        })
        .collect()
}
