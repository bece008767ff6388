mod pass_order;
