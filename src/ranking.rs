// ABOUTME: Ranking collaborator contract with candidate-order and LLM prompt implementations
// ABOUTME: Lenient JSON parsing of model output, invalid picks dropped, fallback on parse failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ranking
//!
//! A ranking collaborator receives the prepared [`RecommendationContext`]
//! and returns an ordered top-N of candidate names with justifications.
//! Every returned name is guaranteed to be a member of the candidate set.

use std::collections::HashSet;

use async_trait::async_trait;
use moodfit_core::constants::ranking::FALLBACK_REASON;
use moodfit_core::models::{injury_label, RankedExercise};
use moodfit_intelligence::RecommendationContext;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};

/// Orders candidates into a top-N
#[async_trait]
pub trait RankingCollaborator: Send + Sync {
    /// Rank up to `top_n` candidates from the context
    async fn rank(
        &self,
        context: &RecommendationContext,
        top_n: usize,
    ) -> AppResult<Vec<RankedExercise>>;
}

/// Deterministic ranking: the first candidates in catalog order
#[derive(Debug, Clone)]
pub struct CandidateOrderRanker {
    reason: String,
}

impl Default for CandidateOrderRanker {
    fn default() -> Self {
        Self {
            reason: FALLBACK_REASON.to_owned(),
        }
    }
}

impl CandidateOrderRanker {
    /// Ranker attaching a custom justification
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Synchronous ranking used directly as a fallback
    #[must_use]
    pub fn rank_now(&self, context: &RecommendationContext, top_n: usize) -> Vec<RankedExercise> {
        context
            .candidates
            .iter()
            .take(top_n)
            .enumerate()
            .map(|(i, exercise)| RankedExercise {
                rank: i + 1,
                name: exercise.name.clone(),
                reason: self.reason.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl RankingCollaborator for CandidateOrderRanker {
    async fn rank(
        &self,
        context: &RecommendationContext,
        top_n: usize,
    ) -> AppResult<Vec<RankedExercise>> {
        Ok(self.rank_now(context, top_n))
    }
}

/// Extract the outermost JSON object from model output
///
/// Code fences are removed and everything outside the first `{` and the last
/// `}` is ignored.
///
/// # Errors
///
/// Returns `SerializationError` when no JSON object can be parsed
pub fn parse_model_json(text: &str) -> AppResult<Value> {
    let cleaned = text.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();
    let candidate = match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if start < end => &cleaned[start..=end],
        _ => cleaned,
    };
    Ok(serde_json::from_str(candidate)?)
}

fn field_str<'v>(item: &'v Value, keys: &[&str]) -> Option<&'v str> {
    keys.iter().find_map(|k| item.get(*k).and_then(Value::as_str))
}

fn field_rank(item: &Value) -> Option<usize> {
    let value = item.get("rank")?;
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

/// Keep only picks with a rank in `1..=top_n` naming a candidate, sorted by rank
///
/// Duplicate ranks and duplicate names keep their first occurrence.
#[must_use]
pub fn validate_ranking(
    parsed: &Value,
    context: &RecommendationContext,
    top_n: usize,
) -> Vec<RankedExercise> {
    let items = parsed
        .get("top3")
        .or_else(|| parsed.get("ranking"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut seen_ranks = HashSet::new();
    let mut seen_names = HashSet::new();
    let mut ranked: Vec<RankedExercise> = items
        .iter()
        .filter_map(|item| {
            let rank = field_rank(item)?;
            let name = field_str(item, &["운동명", "name"])?.trim();
            if !(1..=top_n).contains(&rank) || !context.has_candidate(name) {
                debug!(rank, name, "Dropping invalid ranking item");
                return None;
            }
            if !seen_ranks.insert(rank) || !seen_names.insert(name.to_owned()) {
                return None;
            }
            Some(RankedExercise {
                rank,
                name: name.to_owned(),
                reason: field_str(item, &["이유", "reason"]).unwrap_or_default().to_owned(),
            })
        })
        .collect();
    ranked.sort_by_key(|r| r.rank);
    ranked
}

/// Ranking through a language model prompt
pub struct PromptRanker<P: LlmProvider> {
    provider: P,
    model: Option<String>,
    temperature: f32,
    fallback: CandidateOrderRanker,
}

impl<P: LlmProvider> PromptRanker<P> {
    /// Ranker over a provider with its default model
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            model: None,
            temperature: 0.7,
            fallback: CandidateOrderRanker::default(),
        }
    }

    /// Use a specific model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// System instructions for the ranking request
    #[must_use]
    pub fn system_prompt(context: &RecommendationContext, top_n: usize) -> String {
        let equipment = if context.equipment().is_empty() {
            "없음/미기재".to_owned()
        } else {
            context.equipment().join(", ")
        };
        format!(
            "당신은 운동 처방 코치입니다.\n\
             후보 운동 목록에서 사용자에게 가장 잘 맞는 운동 {top_n}개를 고르고 각각 구체적인 이유를 쓰세요.\n\
             \n\
             [규칙]\n\
             1) 추천 운동은 서로 다른 유형/계열이어야 합니다.\n\
             2) 사용자 정적 정보(프로필)를 반드시 고려하세요.\n\
             3) 오늘의 상태를 종합해 현실적으로 수행 가능한 운동을 우선하세요.\n\
             4) 장소: {venue}. 비/눈이거나 실내 권장이면 실내/홈트 위주로 고르세요.\n\
             5) 보유 장비로 가능한 운동을 우선하세요. 보유 장비: {equipment}\n\
             6) 후보 목록에 없는 운동명은 쓰지 마세요.\n\
             7) JSON 외의 텍스트는 출력하지 마세요.\n\
             \n\
             출력 형식:\n\
             {{\"top3\": [{{\"rank\": 1, \"운동명\": \"...\", \"이유\": \"...\"}}]}}",
            venue = context.venue.venue.label(),
        )
    }

    /// JSON payload describing the user, the day and the candidates
    #[must_use]
    pub fn user_payload(context: &RecommendationContext) -> Value {
        let profile = &context.profile;
        let daily = &context.daily;
        json!({
            "현재날씨": {
                "상태": context.weather.condition,
                "온도": context.weather.temperature_celsius,
            },
            "사용자정적정보": {
                "이름": profile.name,
                "나이": profile.age,
                "성별": profile.gender,
                "키": profile.height_cm,
                "몸무게": profile.weight_kg,
                "활동량": profile.activity_level.label(),
                "부상 여부": injury_label(profile.has_injury),
                "부상 부위": profile.injury_details,
            },
            "오늘동적정보": {
                "날짜": daily.date.to_string(),
                "감정": daily.emotions,
                "수면시간": daily.sleep_hours,
                "운동가능시간(분)": daily.available_minutes,
                "스트레스": daily.stress.label(),
                "운동목적": daily.purpose.label(),
                "목표강도": context.target_tier().label(),
                "각성도": context.arousal(),
            },
            "운동장소": {
                "장소": context.venue.venue.label(),
                "안내": context.venue.message,
            },
            "보유장비": context.equipment(),
            "후보운동목록": context.candidates.iter().map(|e| json!({
                "운동명": e.name,
                "운동강도": e.tier.label(),
                "운동목적": e.purposes.join(","),
                "감정매핑": e.emotions.join(","),
                "단위체중당에너지소비량": e.energy_coefficient,
            })).collect::<Vec<_>>(),
        })
    }

    fn build_request(&self, context: &RecommendationContext, top_n: usize) -> ChatRequest {
        let request = ChatRequest::new(vec![
            ChatMessage::system(Self::system_prompt(context, top_n)),
            ChatMessage::user(Self::user_payload(context).to_string()),
        ])
        .with_temperature(self.temperature);
        match &self.model {
            Some(model) => request.with_model(model.clone()),
            None => request.with_model(self.provider.default_model()),
        }
    }
}

#[async_trait]
impl<P: LlmProvider> RankingCollaborator for PromptRanker<P> {
    async fn rank(
        &self,
        context: &RecommendationContext,
        top_n: usize,
    ) -> AppResult<Vec<RankedExercise>> {
        let request = self.build_request(context, top_n);
        let response = self.provider.complete(&request).await.map_err(|e| {
            AppError::new(
                ErrorCode::ExternalServiceError,
                format!("{} ranking failed: {}", self.provider.name(), e.message),
            )
            .with_source(e)
        })?;

        let ranked = parse_model_json(&response.content)
            .map(|parsed| validate_ranking(&parsed, context, top_n))
            .unwrap_or_default();

        if ranked.is_empty() {
            warn!(
                provider = self.provider.name(),
                "Model ranking unusable, falling back to candidate order"
            );
            return Ok(self.fallback.rank_now(context, top_n));
        }
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_json_strips_fences_and_prose() {
        let text = "Here you go:\n```json\n{\"top3\": [{\"rank\": 1}]}\n```\nthanks";
        let value = parse_model_json(text).unwrap();
        assert_eq!(value["top3"][0]["rank"], 1);
    }

    #[test]
    fn test_parse_model_json_rejects_garbage() {
        assert!(parse_model_json("no json here").is_err());
    }

    #[test]
    fn test_field_rank_accepts_strings() {
        assert_eq!(field_rank(&json!({"rank": "2"})), Some(2));
        assert_eq!(field_rank(&json!({"rank": -1})), None);
    }
}
