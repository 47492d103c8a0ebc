//! Generate message-log-shaped seed messages (samples or synthetic).

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One seed message; fields align with the storage insert payload so the
/// output can be imported without reshaping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedMessage {
    pub sender_id: String,
    pub receiver_id: String,
    pub kind: String,
    pub body: String,
    pub decision: Option<String>,
    pub sent_at: DateTime<Utc>,
}

/// Embedded sample traffic: scout threads in every lifecycle state plus
/// ordinary chat between a handful of companies and contractors.
const SAMPLES_JSON: &str = include_str!("samples.json");

/// Generates messages: by default the built-in samples; config from env.
/// - SEED_USE_SAMPLES: "1" (default) = use samples, "0" = generate synthetic
/// - SEED_MESSAGES_COUNT: limit count (default: all samples, 40 synthetic)
/// - SEED_PAIR_COUNT: company/contractor pairs for synthetic traffic (default 4)
pub fn generate_messages() -> Result<Vec<SeedMessage>> {
    let use_samples = std::env::var("SEED_USE_SAMPLES")
        .unwrap_or_else(|_| "1".into())
        .trim()
        == "1";

    if use_samples {
        let all: Vec<SeedMessage> = serde_json::from_str(SAMPLES_JSON)?;
        let count = std::env::var("SEED_MESSAGES_COUNT")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(all.len());
        let n = count.min(all.len());
        Ok(all.into_iter().take(n).collect())
    } else {
        let count = std::env::var("SEED_MESSAGES_COUNT")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(40);
        generate_synthetic(count)
    }
}

/// Synthetic traffic: each pair cycles through scout, question, answer, and a
/// typed decision reply. Pairs alternate between accepting and declining.
fn generate_synthetic(n: usize) -> Result<Vec<SeedMessage>> {
    let pair_count: usize = std::env::var("SEED_PAIR_COUNT")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(4)
        .max(1);

    let pairs: Vec<(String, String)> = (0..pair_count)
        .map(|_| {
            let suffix = uuid::Uuid::new_v4().simple().to_string();
            (
                format!("company-{}", &suffix[..8]),
                format!("cfo-{}", &suffix[8..16]),
            )
        })
        .collect();

    let mut out = Vec::with_capacity(n);
    let base_time = Utc::now() - Duration::seconds(15 * n as i64);
    for i in 0..n {
        let pair_index = i % pairs.len();
        let (company, contractor) = &pairs[pair_index];
        let sent_at = base_time + Duration::seconds(15 * i as i64);
        let round = i / pairs.len();

        let message = match round % 4 {
            0 => SeedMessage {
                sender_id: company.clone(),
                receiver_id: contractor.clone(),
                kind: "scout".into(),
                body: format!("スカウトです。案件{}についてお話させてください。", i + 1),
                decision: None,
                sent_at,
            },
            1 => SeedMessage {
                sender_id: contractor.clone(),
                receiver_id: company.clone(),
                kind: "chat".into(),
                body: "ご連絡ありがとうございます。詳細を教えてください。".into(),
                decision: None,
                sent_at,
            },
            2 => SeedMessage {
                sender_id: company.clone(),
                receiver_id: contractor.clone(),
                kind: "chat".into(),
                body: "稼働条件と報酬についてご説明します。".into(),
                decision: None,
                sent_at,
            },
            _ => {
                let accept = pair_index % 2 == 0;
                SeedMessage {
                    sender_id: contractor.clone(),
                    receiver_id: company.clone(),
                    kind: "chat".into(),
                    body: if accept {
                        "スカウトを承諾しました".into()
                    } else {
                        "スカウトを辞退しました".into()
                    },
                    decision: Some(if accept { "accepted".into() } else { "declined".into() }),
                    sent_at,
                }
            }
        };
        out.push(message);
    }
    Ok(out)
}
