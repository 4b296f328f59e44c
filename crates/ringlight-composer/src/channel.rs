//! Bounded hand-off queue between network ingress and the renderer
//!
//! Neither side ever blocks: the producer drops the payload when the queue
//! is full, the consumer polls once per render cycle. Every drop is counted
//! so overflow stays observable.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::Vec;

/// Maximum size of one raw command payload in bytes
pub const MAX_PAYLOAD_LEN: usize = 1024;

/// Default command channel capacity
pub const COMMAND_CHANNEL_SIZE: usize = 5;

/// Raw command bytes as received from the network boundary
pub type Payload = Vec<u8, MAX_PAYLOAD_LEN>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueError {
    /// The queue was full; the payload has been dropped
    Full,
    /// The payload exceeds [`MAX_PAYLOAD_LEN`]; it has been dropped
    Oversized { len: usize },
}

impl fmt::Display for EnqueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("command queue full"),
            Self::Oversized { len } => {
                write!(f, "payload of {} bytes exceeds {}", len, MAX_PAYLOAD_LEN)
            }
        }
    }
}

/// Drop counters of a [`CommandChannel`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelStats {
    /// Payloads dropped because the queue was full
    pub dropped_full: u32,
    /// Payloads rejected for exceeding [`MAX_PAYLOAD_LEN`]
    pub dropped_oversized: u32,
}

impl ChannelStats {
    pub const fn dropped(&self) -> u32 {
        self.dropped_full.wrapping_add(self.dropped_oversized)
    }
}

/// Bounded FIFO of raw payloads, single producer / single consumer
///
/// Overflow policy: the incoming payload is dropped and counted, entries
/// already queued are never touched.
pub struct CommandChannel<const K: usize = COMMAND_CHANNEL_SIZE> {
    queue: Channel<CriticalSectionRawMutex, Payload, K>,
    dropped_full: AtomicU32,
    dropped_oversized: AtomicU32,
}

impl<const K: usize> Default for CommandChannel<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const K: usize> CommandChannel<K> {
    pub const fn new() -> Self {
        Self {
            queue: Channel::new(),
            dropped_full: AtomicU32::new(0),
            dropped_oversized: AtomicU32::new(0),
        }
    }

    /// Copy `bytes` into the queue without blocking.
    pub fn try_enqueue(&self, bytes: &[u8]) -> Result<(), EnqueueError> {
        let payload = Payload::from_slice(bytes).map_err(|()| {
            self.dropped_oversized.fetch_add(1, Ordering::Relaxed);
            log::warn!(
                "channel: dropping oversized payload ({} bytes)",
                bytes.len()
            );
            EnqueueError::Oversized { len: bytes.len() }
        })?;
        self.try_enqueue_payload(payload)
    }

    /// Move an already-owned payload into the queue without blocking.
    pub fn try_enqueue_payload(&self, payload: Payload) -> Result<(), EnqueueError> {
        self.queue.try_send(payload).map_err(|_| {
            let dropped = self
                .dropped_full
                .fetch_add(1, Ordering::Relaxed)
                .wrapping_add(1);
            log::warn!("channel: queue full, payload dropped (total {})", dropped);
            EnqueueError::Full
        })
    }

    /// Take the oldest payload, if any, without blocking.
    pub fn try_dequeue(&self) -> Option<Payload> {
        self.queue.try_receive().ok()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    pub const fn capacity(&self) -> usize {
        K
    }

    pub fn stats(&self) -> ChannelStats {
        ChannelStats {
            dropped_full: self.dropped_full.load(Ordering::Relaxed),
            dropped_oversized: self.dropped_oversized.load(Ordering::Relaxed),
        }
    }

    /// Producer handle for the network side
    pub fn sender(&self) -> PayloadSender<'_, K> {
        PayloadSender { channel: self }
    }

    /// Consumer handle for the render task
    pub fn receiver(&self) -> PayloadReceiver<'_, K> {
        PayloadReceiver { channel: self }
    }
}

/// Producing end of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct PayloadSender<'a, const K: usize = COMMAND_CHANNEL_SIZE> {
    channel: &'a CommandChannel<K>,
}

impl<const K: usize> PayloadSender<'_, K> {
    pub fn try_enqueue(&self, bytes: &[u8]) -> Result<(), EnqueueError> {
        self.channel.try_enqueue(bytes)
    }

    pub fn stats(&self) -> ChannelStats {
        self.channel.stats()
    }
}

/// Consuming end of a [`CommandChannel`]
pub struct PayloadReceiver<'a, const K: usize = COMMAND_CHANNEL_SIZE> {
    channel: &'a CommandChannel<K>,
}

impl<const K: usize> PayloadReceiver<'_, K> {
    pub fn try_dequeue(&self) -> Option<Payload> {
        self.channel.try_dequeue()
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_k_payloads_and_counts_the_rest() {
        let channel = CommandChannel::<5>::new();
        let sender = channel.sender();
        let mut accepted = 0;
        for i in 0u8..8 {
            if sender.try_enqueue(&[b'0' + i]).is_ok() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 5);
        assert!(channel.is_full());
        assert_eq!(channel.stats().dropped_full, 3);

        let receiver = channel.receiver();
        for i in 0u8..5 {
            assert_eq!(receiver.try_dequeue().unwrap().as_slice(), &[b'0' + i]);
        }
        assert!(receiver.try_dequeue().is_none());
    }

    #[test]
    fn rejects_oversized_payload() {
        let channel = CommandChannel::<2>::new();
        let big = [b' '; MAX_PAYLOAD_LEN + 1];

        assert_eq!(
            channel.try_enqueue(&big),
            Err(EnqueueError::Oversized {
                len: MAX_PAYLOAD_LEN + 1
            })
        );
        assert!(channel.is_empty());
        assert_eq!(
            channel.stats(),
            ChannelStats {
                dropped_full: 0,
                dropped_oversized: 1
            }
        );
    }

    #[test]
    fn accepts_payload_of_exactly_max_len() {
        let channel = CommandChannel::<1>::new();
        let exact = [b' '; MAX_PAYLOAD_LEN];

        assert!(channel.try_enqueue(&exact).is_ok());
        assert_eq!(channel.try_dequeue().unwrap().len(), MAX_PAYLOAD_LEN);
    }
}
