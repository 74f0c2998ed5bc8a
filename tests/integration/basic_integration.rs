/// Integration tests driving the MCP server over in-memory streams
use chrono::NaiveDate;
use habit_tracker::mcp::protocol::JsonRpcResponse;
use habit_tracker::mcp::McpServer;
use habit_tracker::HabitTrackerServer;
use serde_json::{json, Value};

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn tool_call(id: u64, name: &str, arguments: Value) -> String {
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "tools/call",
            "params": {"name": name, "arguments": arguments}
        })
        .to_string()
    }

    /// Feed `lines` through a fresh server and collect the responses
    async fn run_session(lines: &[String]) -> (McpServer, Vec<JsonRpcResponse>) {
        let input = lines.join("\n") + "\n";
        let mut output: Vec<u8> = Vec::new();

        let mut server = McpServer::new(HabitTrackerServer::new(Some(today())));
        server
            .serve(input.as_bytes(), &mut output)
            .await
            .expect("serve should finish cleanly at end of input");

        let responses = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (server, responses)
    }

    fn text(response: &JsonRpcResponse) -> String {
        response.result.as_ref().unwrap()["content"][0]["text"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_full_session_workflow() {
        let lines = vec![
            r#"{"jsonrpc":"2.0","id":0,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"1"}}}"#.to_string(),
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#.to_string(),
            tool_call(1, "habit_add", json!({"name": "Exercise"})),
            tool_call(2, "habit_add", json!({"name": "Read"})),
            tool_call(3, "habit_check", json!({"name": "Exercise", "done": true})),
            tool_call(4, "habit_check", json!({"name": "Read", "done": true, "date": "2023-12-31"})),
            tool_call(5, "habit_list", json!({})),
            tool_call(6, "habit_summary", json!({})),
        ];

        let (server, responses) = run_session(&lines).await;

        // The notification gets no reply
        assert_eq!(responses.len(), 7);
        assert!(server.is_initialized());
        assert_eq!(responses[0].id, json!(0));
        assert_eq!(responses[6].id, json!(6));

        assert!(text(&responses[5]).contains("[x] Exercise\n[ ] Read"));
        let summary = text(&responses[6]);
        assert!(summary.contains("- Total habits: 2\n- Completed: 1"));
        assert!(summary.contains("- Exercise: 1\n- Read: 1"));
    }

    #[tokio::test]
    async fn test_duplicate_and_remove() {
        let lines = vec![
            tool_call(1, "habit_add", json!({"name": "Exercise"})),
            tool_call(2, "habit_add", json!({"name": "Exercise"})),
            tool_call(3, "habit_remove", json!({"name": "Meditate"})),
            tool_call(4, "habit_remove", json!({"name": "Exercise"})),
            tool_call(5, "habit_list", json!({})),
        ];

        let (server, responses) = run_session(&lines).await;

        assert!(text(&responses[1]).contains("already tracked"));
        assert_eq!(responses[2].result.as_ref().unwrap()["isError"], true);
        assert!(text(&responses[4]).starts_with("No habits to track"));
        assert!(server.habit_tracker().session().tracker().is_empty());
    }

    #[tokio::test]
    async fn test_bad_lines_do_not_stop_the_session() {
        let lines = vec![
            "this is not json".to_string(),
            String::new(),
            tool_call(1, "habit_add", json!({"name": "Read"})),
        ];

        let (server, responses) = run_session(&lines).await;

        assert_eq!(responses.len(), 2);
        assert!(responses[0].error.is_some());
        assert_eq!(server.habit_tracker().session().tracker().len(), 1);
    }

    #[test]
    fn test_empty_input_ends_session() {
        let (server, responses) = tokio_test::block_on(run_session(&[]));

        assert!(responses.is_empty());
        assert!(!server.is_initialized());
    }
}
