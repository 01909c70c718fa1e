use rocketreach_http::{RocketReachClient, RocketReachError};

fn live_client() -> Option<RocketReachClient> {
    match RocketReachClient::from_env() {
        Ok(client) => Some(client),
        Err(_) => {
            eprintln!("skipping live test: ROCKETREACH_API_KEY is not set");
            None
        }
    }
}

#[tokio::test]
async fn live_account_info_and_rejected_key() {
    let Some(client) = live_client() else {
        return;
    };

    let account = client
        .account_info()
        .await
        .expect("account info must succeed");
    assert!(!account.is_empty());

    let rejected = RocketReachClient::with_config("definitely-not-a-key", client.options().clone())
        .expect("non-empty key passes local validation");
    match rejected.account_info().await {
        Err(RocketReachError::Api { status, .. }) => assert!((400..500).contains(&status)),
        other => panic!("expected client error for bogus key, got {other:?}"),
    }
}
