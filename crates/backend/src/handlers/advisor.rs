use axum::extract::State;
use axum::Json;
use contracts::domain::a004_ai_advisor::aggregate::{
    BusinessAdvice, ChatRequest, ChatResponse, Insight,
};

use crate::shared::error::ApiError;
use crate::shared::state::SharedState;

/// GET /api/advisor/advice
pub async fn business_advice(
    State(state): State<SharedState>,
) -> Result<Json<Vec<BusinessAdvice>>, ApiError> {
    state.simulate_latency().await;
    Ok(Json(state.store.business_advice()))
}

/// GET /api/advisor/insights
pub async fn insights(State(state): State<SharedState>) -> Result<Json<Vec<Insight>>, ApiError> {
    state.simulate_latency().await;
    Ok(Json(state.store.insights()))
}

/// POST /api/advisor/chat
pub async fn chat(
    State(state): State<SharedState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    state.simulate_latency().await;
    tracing::info!("Chat question: {}", request.question);
    Ok(Json(ChatResponse {
        answer: state.store.answer_question(&request.question),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::state;

    #[tokio::test]
    async fn test_chat_out_of_stock() {
        let Json(response) = chat(
            state(),
            Json(ChatRequest {
                question: "Which items are completely out of stock?".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(
            response.answer,
            "You are completely out of stock for: Omeprazole 20mg."
        );
    }

    #[tokio::test]
    async fn test_advice_and_insights() {
        assert_eq!(business_advice(state()).await.unwrap().0.len(), 4);
        assert_eq!(insights(state()).await.unwrap().0.len(), 3);
    }
}
