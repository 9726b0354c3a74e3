// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use genoscan::errors::GenoscanError;

fn main() -> Result<(), GenoscanError> {
    genoscan::run()
}
