#[cfg(test)]
mod tests {
    use httpmock::{Method::GET, MockServer};
    use reqwest::Client;
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};

    use rust_decimal::Decimal;

    use crate::{
        api::{FmpApi, fmp::BATCH_SIZE},
        app::calc::to_movers,
    };

    fn quotes_body(symbols: &[String]) -> Value {
        Value::Array(
            symbols
                .iter()
                .map(|s| json!({"symbol": s, "name": s, "price": 11.0, "previousClose": 10.0}))
                .collect(),
        )
    }

    fn symbols(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("S{:03}", i)).collect()
    }

    #[tokio::test]
    async fn get_batch_quotes_splits_into_batches() {
        let server = MockServer::start();
        let symbols = symbols(250);
        let batches: Vec<&[String]> = symbols.chunks(BATCH_SIZE).collect();
        assert_eq!(batches.len(), 3);

        let mocks: Vec<_> = batches
            .iter()
            .map(|batch| {
                server.mock(|when, then| {
                    when.method(GET)
                        .path(format!("/quote/{}", batch.join(",")))
                        .query_param("apikey", "demo");
                    then.status(200)
                        .header("content-type", "application/json")
                        .json_body(quotes_body(batch));
                })
            })
            .collect();

        let api = FmpApi::new(Client::new(), &server.base_url(), "demo");
        let quotes = api.get_batch_quotes(&symbols).await;

        for mock in &mocks {
            mock.assert();
        }
        assert!(batches.iter().all(|batch| batch.len() <= BATCH_SIZE));
        assert_eq!(quotes.len(), 250);
        assert!(quotes.iter().all(|q| symbols.contains(q.symbol())));
        assert_eq!(quotes[0].symbol(), "S000");
        assert_eq!(quotes[249].symbol(), "S249");
        assert_eq!(*quotes[0].price(), Some(dec!(11)));
        assert_eq!(*quotes[0].previous_close(), Some(dec!(10)));
    }

    #[tokio::test]
    async fn get_batch_quotes_skips_failed_batch() {
        let server = MockServer::start();
        let symbols = symbols(150);
        let (first, second) = symbols.split_at(BATCH_SIZE);

        let failing = server.mock(|when, then| {
            when.method(GET).path(format!("/quote/{}", first.join(",")));
            then.status(500);
        });
        let working = server.mock(|when, then| {
            when.method(GET).path(format!("/quote/{}", second.join(",")));
            then.status(200).json_body(quotes_body(second));
        });

        let api = FmpApi::new(Client::new(), &server.base_url(), "demo");
        let quotes = api.get_batch_quotes(&symbols).await;

        failing.assert();
        working.assert();
        assert_eq!(quotes.len(), 50);
        assert_eq!(quotes[0].symbol(), "S100");
    }

    #[tokio::test]
    async fn get_batch_quotes_all_failed_is_empty() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/quote/AAPL,MSFT");
            then.status(200).body("{\"Error Message\": \"Invalid API KEY.\"}");
        });

        let api = FmpApi::new(Client::new(), &server.base_url(), "demo");
        let quotes = api
            .get_batch_quotes(&["AAPL".to_string(), "MSFT".to_string()])
            .await;

        mock.assert();
        assert!(quotes.is_empty());
    }

    #[tokio::test]
    async fn get_batch_quotes_empty_symbols_sends_nothing() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!([]));
        });

        let api = FmpApi::new(Client::new(), &server.base_url(), "demo");
        let quotes = api.get_batch_quotes(&[]).await;

        assert_eq!(mock.hits(), 0);
        assert!(quotes.is_empty());
    }

    #[tokio::test]
    async fn get_quotes_defaults_missing_fields() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/quote/AAPL,BAD,NEW");
            then.status(200).json_body(json!([
                {"symbol": "AAPL", "name": "Apple Inc.", "price": 189.84, "previousClose": 187.5},
                {"name": "no symbol"},
                {"symbol": "NEW", "price": null}
            ]));
        });

        let api = FmpApi::new(Client::new(), &server.base_url(), "demo");
        let symbols = vec!["AAPL".to_string(), "BAD".to_string(), "NEW".to_string()];
        let quotes = api.get_quotes(&symbols).await.unwrap();

        mock.assert();
        assert_eq!(quotes.len(), 2);
        assert_eq!(*quotes[0].price(), Some(dec!(189.84)));
        assert_eq!(quotes[1].symbol(), "NEW");
        assert_eq!(*quotes[1].name(), None);
        assert_eq!(*quotes[1].price(), None);
    }

    #[tokio::test]
    async fn get_batch_quotes_defaults_bad_prices() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/quote/A,B,C,D");
            then.status(200).json_body(json!([
                {"symbol": "A", "name": "Alpha", "price": 1e30, "previousClose": 10},
                {"symbol": "B", "name": 7, "price": "n/a", "previousClose": 10},
                {"symbol": "C", "name": "Gamma", "price": 10.5, "previousClose": 10},
                {"symbol": "D", "name": "Delta", "price": "12.5", "previousClose": {"x": 1}}
            ]));
        });

        let api = FmpApi::new(Client::new(), &server.base_url(), "demo");
        let symbols: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let quotes = api.get_batch_quotes(&symbols).await;

        mock.assert();
        let received: Vec<&str> = quotes.iter().map(|q| q.symbol().as_str()).collect();
        assert_eq!(received, vec!["A", "B", "C", "D"]);
        assert_eq!(*quotes[0].price(), None);
        assert_eq!(*quotes[1].name(), None);
        assert_eq!(*quotes[3].price(), Some(dec!(12.5)));
        assert_eq!(*quotes[3].previous_close(), None);

        let movers = to_movers(quotes);
        assert_eq!(*movers[0].change_percent(), Decimal::ZERO);
        assert_eq!(*movers[1].change_percent(), Decimal::ZERO);
        assert_eq!(*movers[2].change_percent(), dec!(5));
        assert_eq!(*movers[3].change_percent(), Decimal::ZERO);
    }
}
