//! Label mutations against a labelable (a session issue).

use crate::{GithubClient, error::GithubError};

const ADD_LABELS_MUTATION: &str = "mutation($id: ID!, $labels: [ID!]!) { \
     addLabelsToLabelable(input: { labelableId: $id, labelIds: $labels }) { clientMutationId } }";

const REMOVE_LABELS_MUTATION: &str = "mutation($id: ID!, $labels: [ID!]!) { \
     removeLabelsFromLabelable(input: { labelableId: $id, labelIds: $labels }) { clientMutationId } }";

impl GithubClient {
    /// Apply a reconciliation result to one issue: add `add`, then remove
    /// `remove` (both are label node ids). Empty sets send no request, so
    /// a no-op reconciliation touches the network zero times.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError`] if either mutation fails; when the add
    /// succeeded and the remove failed the issue is left over-labeled and
    /// the next run converges it.
    pub async fn mutate_labels(
        &self,
        labelable_id: &str,
        add: &[String],
        remove: &[String],
    ) -> Result<(), GithubError> {
        if !add.is_empty() {
            self.post_graphql(
                ADD_LABELS_MUTATION,
                serde_json::json!({ "id": labelable_id, "labels": add }),
            )
            .await?;
            tracing::debug!(labelable = labelable_id, count = add.len(), "added labels");
        }
        if !remove.is_empty() {
            self.post_graphql(
                REMOVE_LABELS_MUTATION,
                serde_json::json!({ "id": labelable_id, "labels": remove }),
            )
            .await?;
            tracing::debug!(labelable = labelable_id, count = remove.len(), "removed labels");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_sets_send_no_requests() {
        // The endpoint is unroutable; a request would fail loudly.
        let client = GithubClient::new("http://127.0.0.1:1/graphql", "token");
        client.mutate_labels("I_abc", &[], &[]).await.unwrap();
    }
}
