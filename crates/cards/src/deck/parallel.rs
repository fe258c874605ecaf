// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel deck sampling.
use rand::prelude::*;
use std::thread;

use super::{Card, Deck};

impl Deck {
    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of k distinct cards.
    ///
    /// The closure takes the task identifier (0..num_tasks) and the sample,
    /// the sample cards are in random order so that taking the first n cards
    /// of a sample is the same as dealing n cards from a shuffled deck.
    ///
    /// When `seed` is given each task uses `seed + task_id` to seed its
    /// generator so that runs are reproducible.
    pub fn par_sample<F>(
        &self,
        num_tasks: usize,
        samples_per_task: usize,
        k: usize,
        seed: Option<u64>,
        f: F,
    ) where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!(num_tasks > 0);
        assert!(k > 0 && k <= self.cards.len(), "0 < k <= deck size");

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut rng = match seed {
                        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
                        None => SmallRng::from_os_rng(),
                    };

                    let mut h = Vec::with_capacity(k);
                    for _ in 0..samples_per_task {
                        h.clear();
                        h.extend(self.cards.choose_multiple(&mut rng, k));
                        h.shuffle(&mut rng);
                        f(task_id, &h);
                    }
                });
            }
        });
    }
}
