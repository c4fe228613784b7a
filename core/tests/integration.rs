//! End-to-end tests against a canned-response HTTP server. Each test
//! starts its own server so stub queues never interleave, points a real
//! client at it, and asserts on both the parsed result and the exact
//! request the client put on the wire.

use messaging_core::{
    Client, Contact, Error, Group, GroupMember, Message, ProgramReply, Schedule, ScheduleMessage,
};
use mock_server::{Stub, StubServer};

fn client(server: &StubServer) -> Client {
    Client::new(&server.url(), "9876", "1234")
}

#[test]
fn send_message_posts_wrapped_body_and_parses_tracking() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::json(
        200,
        r#"{"response":{"status":"success","notifications":{"to":["4102804827"],"from":"scsrest","trackinginformation":[{"destination":"4102804827","messagestatus":"Message Accepted","messageID":"GW1_AVvciGlHRM32pw0Q","messagetext":"Test message"}]}}}"#,
    ));

    let message = Message::new(vec!["4102804827".to_string()], "scsrest", "Test message");
    let response = client(&server).messaging().send_message(&message).unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body.result.status, "success");
    let notifications = response.body.notifications.unwrap();
    assert_eq!(notifications.to, vec!["4102804827"]);
    assert_eq!(
        notifications.tracking_information[0].message_id,
        "GW1_AVvciGlHRM32pw0Q"
    );

    let exchanges = server.take_exchanges();
    assert_eq!(exchanges.len(), 1);
    assert_eq!(exchanges[0].method, "POST");
    assert_eq!(exchanges[0].uri, "/messages");
    assert_eq!(
        exchanges[0].body,
        r#"{"sendmessage":{"message":"Test message","to":["4102804827"],"from":"scsrest"}}"#
    );
}

#[test]
fn every_request_carries_the_standard_headers() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::json(200, r#"{"response":{"status":"success"}}"#));

    client(&server).groups().delete_all_groups().unwrap();

    let exchanges = server.take_exchanges();
    let exchange = &exchanges[0];
    assert_eq!(exchange.header("Authorization"), Some("Basic OTg3NjoxMjM0"));
    assert_eq!(exchange.header("X-Requested-By"), Some("12345"));
    assert_eq!(exchange.header("Accept"), Some("application/json"));
    assert_eq!(exchange.header("Content-Type"), Some("application/json"));
    assert!(exchange
        .header("User-Agent")
        .unwrap()
        .starts_with("messaging-core/"));
}

#[test]
fn add_contacts_sends_contact_list_and_parses_statuses() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::json(
        200,
        r#"{"response":{"statusList":[{"status":"success"}]}}"#,
    ));

    let contacts = vec![Contact::new("14102718101", "John", "Doe")];
    let response = client(&server).contacts().add_contacts(&contacts).unwrap();

    assert_eq!(response.body.statuses.len(), 1);
    assert_eq!(response.body.statuses[0].status, "success");

    let exchanges = server.take_exchanges();
    assert_eq!(exchanges[0].method, "POST");
    assert_eq!(exchanges[0].uri, "/contacts");
    assert_eq!(
        exchanges[0].body,
        r#"{"contactList":{"contacts":[{"mdn":"14102718101","first":"John","last":"Doe"}]}}"#
    );
}

#[test]
fn retrieve_contacts_treats_not_found_as_data() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::json(
        404,
        r#"{"response":{"status":"fail","code":"8203","message":"Contact with the mdn 14102718101 could not be found."}}"#,
    ));

    let response = client(&server)
        .contacts()
        .retrieve_contacts(&["14102718101"])
        .unwrap();

    assert_eq!(response.status, 404);
    assert_eq!(response.body.result.code.as_deref(), Some("8203"));
    assert!(response.body.contacts.is_none());

    let exchanges = server.take_exchanges();
    assert_eq!(exchanges[0].method, "GET");
    assert_eq!(exchanges[0].uri, "/contacts/14102718101");
}

#[test]
fn delete_contacts_not_found_is_a_client_error() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::json(
        404,
        r#"{"response":{"status":"fail","code":"8103","message":"Some or all of the contacts with mdns 14102718101,14102718102 not found."}}"#,
    ));

    let err = client(&server)
        .contacts()
        .delete_contacts(&["14102718101", "14102718102"])
        .unwrap_err();

    match err {
        Error::Client { status, error } => {
            assert_eq!(status, 404);
            assert_eq!(error.status, "fail");
            assert_eq!(error.code.as_deref(), Some("8103"));
        }
        other => panic!("expected client error, got {other:?}"),
    }

    let exchanges = server.take_exchanges();
    assert_eq!(exchanges[0].method, "DELETE");
    assert_eq!(exchanges[0].uri, "/contacts/14102718101,14102718102");
    assert_eq!(exchanges[0].body, "");
}

#[test]
fn delete_all_contacts_uses_the_query_flag() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::json(200, r#"{"response":{"status":"success"}}"#));

    client(&server).contacts().delete_all_contacts().unwrap();

    let exchanges = server.take_exchanges();
    assert_eq!(exchanges[0].method, "DELETE");
    assert_eq!(exchanges[0].uri, "/contacts?all=true");
}

#[test]
fn add_group_and_members_follow_the_wire_contract() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::json(200, r#"{"response":{"status":"success"}}"#));
    server.enqueue(Stub::json(200, r#"{"response":{"status":"success"}}"#));

    let api = client(&server);
    let mut group = Group::new("Test1");
    group.description = Some("Test group".to_string());
    api.groups().add_group(&group).unwrap();

    let mut member = GroupMember::new("14102718101");
    member.contact_name = Some("Doe-John".to_string());
    api.groups().add_members("Test1", &[member]).unwrap();

    let exchanges = server.take_exchanges();
    assert_eq!(exchanges[0].uri, "/groups");
    assert_eq!(
        exchanges[0].body,
        r#"{"groups":{"groupname":"Test1","groupdesc":"Test group"}}"#
    );
    assert_eq!(exchanges[1].uri, "/groups/Test1/members");
    assert_eq!(
        exchanges[1].body,
        r#"{"groupmembers":{"members":[{"mdn":"14102718101","contact":"Doe-John"}]}}"#
    );
}

#[test]
fn delivery_receipts_parse_the_status_list() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::json(
        200,
        r#"{"response":{"status":"success","deliveryreceipt":{"deliverystatuslist":[{"deliverydate":"2014-05-28T00:00Z","deliverystatus":"Undeliverable by Gateway","messageID":"GW1_EwGohZtGQpmh8lGB","to":"14106277808"}]}}}"#,
    ));

    let response = client(&server)
        .messaging()
        .delivery_receipts(&["GW1_EwGohZtGQpmh8lGB"])
        .unwrap();

    let list = response.body.delivery_receipt.unwrap().delivery_status_list;
    assert_eq!(list[0].min, "14106277808");
    assert_eq!(list[0].delivery_status, "Undeliverable by Gateway");

    let exchanges = server.take_exchanges();
    assert_eq!(exchanges[0].uri, "/receipts/GW1_EwGohZtGQpmh8lGB");
}

#[test]
fn program_replies_build_path_segments_and_query() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::json(
        200,
        r#"{"response":{"status":"success","replies":{"numberofreplies":1,"replylist":[{"from":"14106277808","text":"Reply back","date":"2015-07-13T00:00Z"}]}}}"#,
    ));

    let mut query = ProgramReply::new("scsrest");
    query.minutes = Some("7".to_string());
    query.destinations = vec!["14106277808".to_string()];
    let response = client(&server).messaging().program_replies(&query).unwrap();

    let replies = response.body.replies.unwrap();
    assert_eq!(replies.number_of_replies, 1);
    assert_eq!(replies.replies[0].min, "14106277808");

    let exchanges = server.take_exchanges();
    assert_eq!(exchanges[0].method, "GET");
    assert_eq!(
        exchanges[0].uri,
        "/programreplies/scsrest/since/14106277808?minutes=7"
    );
}

#[test]
fn schedule_message_is_created_under_its_own_root() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::json(
        201,
        r#"{"schedulemessage":{"messageID":11100000103313,"message":{"to":["410333444"]},"schedule":{"recurrence":"weekly","startdate":"2015-11-20T12:46-04","enddate":"2016-07-29T18:46-04","name":"Test schedule"}}}"#,
    ));

    let mut message = Message::new(vec!["410333444".to_string()], "scsrest", "Test schedule");
    message.subject = Some("Test".to_string());
    let schedule = Schedule {
        recurrence: Some("weekly".to_string()),
        start_date: Some("2015-11-20T12:46-04".to_string()),
        expire_date: Some("2016-07-29T18:46-04".to_string()),
        job_name: Some("Test schedule".to_string()),
    };
    let response = client(&server)
        .scheduling()
        .schedule_message(&ScheduleMessage::new(message, schedule))
        .unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.body.message_id, Some(11100000103313));

    let exchanges = server.take_exchanges();
    assert_eq!(exchanges[0].method, "POST");
    assert_eq!(exchanges[0].uri, "/schedules");
    assert_eq!(
        exchanges[0].body,
        r#"{"schedulemessage":{"message":{"message":"Test schedule","subject":"Test","to":["410333444"],"from":"scsrest"},"schedule":{"recurrence":"weekly","startdate":"2015-11-20T12:46-04","enddate":"2016-07-29T18:46-04","name":"Test schedule"}}}"#
    );
}

#[test]
fn delete_scheduled_messages_treats_not_found_as_data() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::json(
        404,
        r#"{"response":{"status":"fail","code":"9105","message":"Scheduled message(s) with id(s) 11100000103313 not found."}}"#,
    ));

    let response = client(&server)
        .scheduling()
        .delete_scheduled_messages(&["11100000103313"])
        .unwrap();

    assert_eq!(response.status, 404);
    assert_eq!(response.body.code.as_deref(), Some("9105"));

    let exchanges = server.take_exchanges();
    assert_eq!(exchanges[0].uri, "/schedules/11100000103313");
}

#[test]
fn unauthorized_maps_to_an_authentication_error() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::text(401, "This request requires HTTP authentication."));

    let err = client(&server)
        .messaging()
        .delivery_notifications("GW1_AVvciGlHRM32pw0Q")
        .unwrap_err();

    assert!(matches!(err, Error::Authentication));
}

#[test]
fn server_error_maps_to_a_service_error() {
    let server = StubServer::start().unwrap();
    server.enqueue(Stub::text(500, "internal error"));

    let err = client(&server)
        .contacts()
        .retrieve_contacts(&["14102718101"])
        .unwrap_err();

    assert!(matches!(err, Error::Service(_)));
}

#[test]
fn unreachable_host_is_an_io_error() {
    // Port 1 is never listening on loopback.
    let unreachable = Client::new("http://127.0.0.1:1/", "9876", "1234");
    let err = unreachable
        .contacts()
        .retrieve_contacts(&["14102718101"])
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
