mod support;

use spfy_mode::pagination::{fetch_audio_features, list_playlists, list_track_ids};
use support::{MockApi, Request, paged, playlist, track_ids};

#[tokio::test]
async fn playlists_are_collected_across_pages_in_order() {
    let playlists: Vec<_> = (0..120)
        .map(|i| playlist(&format!("p{i}"), &format!("list {i}")))
        .collect();
    let api = MockApi::new().with_playlist_pages(paged(&playlists, 50));

    let listed = list_playlists(&api, "alice", 50).await.unwrap();

    assert_eq!(listed, playlists);
    let offsets: Vec<_> = api
        .requests()
        .into_iter()
        .map(|r| match r {
            Request::Playlists {
                username,
                limit,
                offset,
            } => {
                assert_eq!(username, "alice");
                assert_eq!(limit, 50);
                offset
            }
            other => panic!("unexpected request {other:?}"),
        })
        .collect();
    assert_eq!(offsets, [0, 50, 100]);
}

#[tokio::test]
async fn total_on_a_page_boundary_stops_without_an_extra_request() {
    let playlists: Vec<_> = (0..100).map(|i| playlist(&i.to_string(), "x")).collect();
    let api = MockApi::new().with_playlist_pages(paged(&playlists, 50));

    let listed = list_playlists(&api, "alice", 50).await.unwrap();

    assert_eq!(listed.len(), 100);
    assert_eq!(api.requests().len(), 2);
}

#[tokio::test]
async fn user_without_playlists_issues_one_request() {
    let api = MockApi::new();

    let listed = list_playlists(&api, "alice", 50).await.unwrap();

    assert!(listed.is_empty());
    assert_eq!(api.requests().len(), 1);
}

#[tokio::test]
async fn track_ids_are_collected_across_pages_in_order() {
    let ids = track_ids("t", 250);
    let api = MockApi::new().with_track_pages("p1", paged(&ids, 100));

    let listed = list_track_ids(&api, &playlist("p1", "Ω"), 100).await.unwrap();

    assert_eq!(listed, ids);
    let requests = api.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(
        requests[2],
        Request::Tracks {
            playlist_id: "p1".into(),
            limit: 100,
            offset: 200,
        }
    );
}

#[tokio::test]
async fn no_track_ids_means_no_feature_request() {
    let api = MockApi::new();

    let features = fetch_audio_features(&api, &[], 50).await.unwrap();

    assert!(features.is_empty());
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn fifty_track_ids_fit_in_one_feature_request() {
    let ids = track_ids("t", 50);
    let api = MockApi::new();

    let features = fetch_audio_features(&api, &ids, 50).await.unwrap();

    assert_eq!(features.len(), 50);
    assert_eq!(api.feature_batches(), [50]);
}

#[tokio::test]
async fn fifty_one_track_ids_take_two_feature_requests() {
    let ids = track_ids("t", 51);
    let api = MockApi::new();

    let features = fetch_audio_features(&api, &ids, 50).await.unwrap();

    assert_eq!(api.feature_batches(), [50, 1]);
    let returned: Vec<_> = features.into_iter().map(|f| f.id).collect();
    assert_eq!(returned, ids);
}

#[tokio::test]
async fn feature_batches_never_exceed_the_api_limit() {
    let ids = track_ids("t", 120);
    let api = MockApi::new();

    fetch_audio_features(&api, &ids, 500).await.unwrap();

    assert_eq!(api.feature_batches(), [50, 50, 20]);
}
