use crate::{
    catalog::ClientError,
    debug,
    tidal::{TidalClient, TidalSession},
    types::{
        SessionToken, TidalErrorResponse, TidalLoginResponse, TidalSessionResponse,
        TidalSubscription,
    },
    utils,
};

/// Logs in with user name and password via `POST login/username`.
///
/// On success the client adopts the new session and the session id is
/// returned as the token to persist. The service's `userMessage` is passed on
/// as the rejection reason.
pub async fn login(
    client: &mut TidalClient,
    username: &str,
    password: &str,
) -> Result<SessionToken, ClientError> {
    let url = format!("{}/login/username", client.config.api_url);
    let client_unique_key = utils::generate_client_unique_key();

    let response = client
        .http
        .post(&url)
        .header("X-Tidal-Token", &client.config.api_token)
        .form(&[
            ("username", username),
            ("password", password),
            ("clientUniqueKey", client_unique_key.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let reason = response
            .json::<TidalErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.user_message)
            .unwrap_or_else(|| status.to_string());
        return Err(ClientError::Rejected(reason));
    }

    let body = response.json::<TidalLoginResponse>().await?;
    let session = TidalSession {
        session_id: body.session_id,
        country_code: body.country_code,
        user_id: body.user_id,
    };

    debug!("logged in as user {}", session.user_id);
    let token = SessionToken(session.session_id.clone());
    client.session = Some(session);
    Ok(token)
}

/// Adopts an existing session id by asking `GET sessions` who it belongs to.
pub async fn load_session(client: &mut TidalClient, session_id: &str) -> bool {
    let url = format!("{}/sessions", client.config.api_url);

    let response = client
        .http
        .get(&url)
        .header("X-Tidal-Token", &client.config.api_token)
        .query(&[("sessionId", session_id)])
        .send()
        .await
        .and_then(|response| response.error_for_status());

    let body = match response {
        Ok(response) => match response.json::<TidalSessionResponse>().await {
            Ok(body) => body,
            Err(e) => {
                debug!("session lookup returned an unexpected body: {}", e);
                return false;
            }
        },
        Err(e) => {
            debug!("session lookup failed: {}", e);
            return false;
        }
    };

    let Some(user_id) = body.user_id else {
        return false;
    };

    client.session = Some(TidalSession {
        session_id: session_id.to_string(),
        country_code: body.country_code,
        user_id,
    });
    true
}

/// Checks the adopted session against the user's subscription endpoint.
pub async fn check_login(client: &TidalClient) -> bool {
    let Some(session) = client.session.as_ref() else {
        return false;
    };
    if session.user_id == 0 {
        return false;
    }

    match client
        .get_json::<TidalSubscription>(&format!("users/{}/subscription", session.user_id), &[])
        .await
    {
        Ok(subscription) => {
            debug!(
                "subscription: {}",
                subscription.kind.as_deref().unwrap_or("unknown")
            );
            true
        }
        Err(_) => false,
    }
}
