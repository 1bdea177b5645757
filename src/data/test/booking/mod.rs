use chrono::{Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{data::booking::BookingRepository, model::api::Page};

mod create;
mod find_future_by_booker_id;
mod find_past_by_booker_id;
mod state_finders_by_owner;
