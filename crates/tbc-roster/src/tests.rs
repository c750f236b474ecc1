//! Unit tests for tbc-roster.

#[cfg(test)]
mod customer {
    use tbc_core::{SimTime, TicketId};

    use crate::{Customer, Ticket};

    fn ticket(id: u64, at: &str) -> Ticket {
        Ticket {
            ticket_id:         TicketId(id),
            issued_at_counter: "C1".to_string(),
            issue_time:        SimTime::parse(at).unwrap(),
        }
    }

    #[test]
    fn fresh_customer_is_unsatisfied() {
        let c = Customer::new("Alice", SimTime::EPOCH, 2);
        assert!(!c.is_satisfied());
        assert_eq!(c.remaining(), 2);
        assert_eq!(c.total_wait_secs(), None);
        assert!(c.tickets.is_empty());
    }

    #[test]
    fn each_customer_gets_its_own_ticket_list() {
        let mut a = Customer::new("Alice", SimTime::EPOCH, 1);
        let b = Customer::new("Bob", SimTime::EPOCH, 1);
        a.tickets.push(ticket(0, "2024-01-01 10:00:30"));
        assert_eq!(a.tickets.len(), 1);
        assert!(b.tickets.is_empty());
    }

    #[test]
    fn satisfied_at_quota() {
        let mut c = Customer::new("Alice", SimTime::parse("2024-01-01 10:00:00").unwrap(), 2);
        c.tickets.push(ticket(0, "2024-01-01 10:00:30"));
        assert!(!c.is_satisfied());
        assert_eq!(c.remaining(), 1);
        c.tickets.push(ticket(1, "2024-01-01 10:01:00"));
        assert!(c.is_satisfied());
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn total_wait_uses_last_ticket() {
        let mut c = Customer::new("Alice", SimTime::parse("2024-01-01 10:00:00").unwrap(), 2);
        c.tickets.push(ticket(0, "2024-01-01 10:00:30"));
        c.tickets.push(ticket(1, "2024-01-01 10:01:00"));
        assert_eq!(c.total_wait_secs(), Some(60));
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use tbc_core::SimTime;

    use crate::loader::load_roster_reader;
    use crate::RosterError;

    const GOOD_CSV: &str = "\
name,entered_time,number_of_tickets
Alice,2024-01-01 10:00:00,2
Bob,2024-01-01 10:00:40,1
Chandra,2024-01-01 10:01:10,3
";

    #[test]
    fn loads_rows_in_order() {
        let roster = load_roster_reader(Cursor::new(GOOD_CSV)).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].name, "Alice");
        assert_eq!(roster[1].name, "Bob");
        assert_eq!(roster[2].name, "Chandra");
        assert_eq!(roster[2].number_of_tickets, 3);
        assert_eq!(
            roster[0].entered_time,
            SimTime::parse("2024-01-01 10:00:00").unwrap()
        );
    }

    #[test]
    fn empty_file_gives_empty_roster() {
        let roster = load_roster_reader(Cursor::new("name,entered_time,number_of_tickets\n"))
            .unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn rejects_zero_quota() {
        let csv = "name,entered_time,number_of_tickets\nAlice,2024-01-01 10:00:00,0\n";
        let err = load_roster_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn rejects_empty_name() {
        let csv = "name,entered_time,number_of_tickets\n ,2024-01-01 10:00:00,1\n";
        assert!(load_roster_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn rejects_bad_timestamp() {
        let csv = "name,entered_time,number_of_tickets\nAlice,yesterday,1\n";
        let err = load_roster_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RosterError::Time(_)), "got {err:?}");
    }

    #[test]
    fn rejects_non_numeric_quota() {
        let csv = "name,entered_time,number_of_tickets\nAlice,2024-01-01 10:00:00,lots\n";
        assert!(load_roster_reader(Cursor::new(csv)).is_err());
    }
}
