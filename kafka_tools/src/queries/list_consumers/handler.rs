use crate::admin::ClusterAdmin;
use crate::filters::{ConsumerSelection, StateFilter};
use crate::models::ConsumerGroupListing;
use crate::queries::list_consumers::{
    ConsumerSummary, ConsumerSummaryQuery, ListConsumersQuery, ListConsumersResponse,
};
use anyhow::{anyhow, Context};
use std::time::Duration;
use tracing::debug;

async fn fetch_groups<A: ClusterAdmin>(
    admin: &A,
    filter: StateFilter,
    timeout: Duration,
) -> Result<Vec<ConsumerGroupListing>, anyhow::Error> {
    tokio::time::timeout(timeout, admin.list_consumer_groups(filter.states(), timeout))
        .await
        .map_err(|_| anyhow!("Listing consumer groups timed out after {timeout:?}"))?
        .context("While listing consumer groups")
}

pub async fn list_consumers<A: ClusterAdmin>(
    admin: &A,
    query: ListConsumersQuery,
) -> Result<ListConsumersResponse, anyhow::Error> {
    let listings = fetch_groups(admin, query.selection.state, query.timeout).await?;
    let fetched = listings.len();
    let groups = query.selection.select(listings);
    debug!("{} of {fetched} consumer groups selected", groups.len());

    Ok(ListConsumersResponse { groups })
}

/// Counts active and inactive groups. Both states are requested concurrently.
pub async fn summarize_consumers<A: ClusterAdmin>(
    admin: &A,
    query: ConsumerSummaryQuery,
) -> Result<ConsumerSummary, anyhow::Error> {
    let count = |filter: StateFilter| async move {
        let selection = ConsumerSelection {
            state: filter,
            include_connectors: query.include_connectors,
            ..Default::default()
        };
        let listings = fetch_groups(admin, filter, query.timeout).await?;
        Result::<_, anyhow::Error>::Ok(selection.select(listings).len())
    };

    let (active, inactive) =
        tokio::try_join!(count(StateFilter::Active), count(StateFilter::Inactive))?;

    Ok(ConsumerSummary { active, inactive })
}
