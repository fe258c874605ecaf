// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example all_deals
// ...
// Total deals      2598960
// Elapsed:         1.912s
// Deals/sec:       1359288
//
// Nothing          2062860
// Jacks or Better  337920
// Two Pair         123552
// ...
// ```

use std::time::Instant;

use vpoker_eval::*;

fn main() {
    // Classify and hold every 5 cards deal.
    let now = Instant::now();
    let mut scores = [0usize; HandScore::COUNT];
    let mut hold_sizes = [0usize; HAND_SIZE + 1];
    let mut exceptions = std::collections::BTreeMap::<char, usize>::new();

    Deck::default().for_each(5, |cards| {
        let Ok(hand) = Hand::new(cards) else {
            return;
        };

        let decision = decide(&hand);
        scores[hand.classify() as usize] += 1;
        hold_sizes[decision.holds.count()] += 1;

        if let Play::Exception { label, .. } = decision.play {
            *exceptions.entry(label).or_default() += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = scores.iter().sum::<usize>();
    println!("Total deals      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Deals/sec:       {:.0}\n", total as f64 / elapsed);

    for score in HandScore::scores() {
        println!("{:<16} {}", score.to_string(), scores[score as usize]);
    }

    println!();
    for (size, count) in hold_sizes.iter().enumerate() {
        println!("Hold {size} cards:    {count}");
    }

    println!();
    for (label, count) in exceptions {
        println!("Exception {label}:      {count}");
    }
}
