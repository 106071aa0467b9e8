mod inject_form;
