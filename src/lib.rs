// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod assistant;
pub mod budget;
pub mod cli;
pub mod commands;
pub mod models;
pub mod series;
pub mod store;
pub mod summary;
pub mod utils;
