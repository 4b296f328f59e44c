use ringlight_composer::RingEngine;

use crate::{
    app::RingUsecases,
    config::{COMMAND_QUEUE_SIZE, LED_COUNT},
};

pub type RingEngineImpl<S, D> = RingEngine<'static, S, D, LED_COUNT, COMMAND_QUEUE_SIZE>;

pub type RingUsecasesImpl = RingUsecases<'static, COMMAND_QUEUE_SIZE>;
