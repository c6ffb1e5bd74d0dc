// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use iomete_spark_jobs::SparkJobClient;
use wiremock::MockServer;

mod runs;

const API_KEY: &str = "t0k3n";

async fn init_test() -> (SparkJobClient, MockServer) {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let mock_server = MockServer::start().await;
    let client = SparkJobClient::new(iomete_http::reqwest_client(), &mock_server.uri(), API_KEY);

    (client, mock_server)
}
